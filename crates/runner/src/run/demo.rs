//! The fixed demonstration sequence.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::Write;

use anyhow::{Context, Result};

use homestead_domain::{EntryLockOutcome, House, Key};

/// Walk two houses through equality, counting, window opening and
/// lock/unlock, writing a human-readable trace to `out`.
///
/// The first house has a window opened before both are locked; it is then
/// unlocked with the second house's key (rejected) and with its own.
pub fn demonstrate(out: &mut impl Write, first: &mut House, second: &mut House) -> Result<()> {
    writeln!(out, "first: {}", first)?;
    writeln!(out, "second: {}", second)?;

    let a: &House = first;
    let b: &House = second;
    writeln!(out)?;
    writeln!(out, "first == first: {}", House::eq(a, a))?;
    writeln!(out, "first == second: {}", House::eq(a, b))?;

    writeln!(out)?;
    writeln!(out, "hash(first): {}", identity_hash(a))?;
    writeln!(out, "hash(second): {}", identity_hash(b))?;

    for (label, house) in [("first", a), ("second", b)] {
        writeln!(out)?;
        writeln!(out, "{}.window_count(): {}", label, house.window_count())?;
        writeln!(out, "{}.door_count(): {}", label, house.door_count())?;
    }

    writeln!(out)?;
    writeln!(out, "first.open_some_window(): {}", first.open_some_window())?;

    let first_key = lock_and_report(out, first)?.context("first entry door was already locked")?;
    let second_key = lock_and_report(out, second)?.context("second entry door was already locked")?;

    writeln!(out)?;
    writeln!(out, "first key: {}", first_key)?;
    writeln!(out, "second key: {}", second_key)?;

    writeln!(out)?;
    writeln!(
        out,
        "first.unlock_with_key(second key): {}",
        first.unlock_with_key(&second_key)
    )?;
    writeln!(
        out,
        "first.unlock_with_key(first key): {}",
        first.unlock_with_key(&first_key)
    )?;

    Ok(())
}

fn lock_and_report(out: &mut impl Write, house: &mut House) -> Result<Option<Key>> {
    let outcome = house.lock_with_key()?;
    for &position in outcome.open_windows() {
        writeln!(
            out,
            "WARNING: window {} of '{}' is open: {}",
            position,
            house.address(),
            house.windows()[position]
        )?;
    }
    if outcome == EntryLockOutcome::AlreadyLocked {
        writeln!(out, "entry door of '{}' is already locked", house.address())?;
    }
    Ok(outcome.into_key())
}

fn identity_hash(house: &House) -> u64 {
    let mut hasher = DefaultHasher::new();
    house.hash(&mut hasher);
    hasher.finish()
}
