//! Assembly of the demonstration houses.

use anyhow::{Context, Result};

use homestead_domain::{
    Address, Color, FloorArea, FloorCount, House, LockableDoor, Material, OpeningType, RoomCount,
};

/// Everything needed to assemble one house.
#[derive(Debug, Clone)]
pub struct HousePlan {
    pub address: &'static str,
    pub floor_area: f64,
    pub rooms: u32,
    pub floors: u32,
    pub entry_door: LockableDoor,
    pub room_doors: i32,
    pub windows: i32,
}

impl HousePlan {
    pub fn build(self) -> Result<House> {
        let address = Address::new(self.address)?;
        let mut builder = House::builder(
            address,
            FloorArea::new(self.floor_area)?,
            RoomCount::new(self.rooms)?,
            FloorCount::new(self.floors)?,
        );
        builder
            .set_entry_door(self.entry_door)?
            .add_room_doors(self.room_doors)?
            .add_windows(self.windows)?;
        builder
            .build()
            .with_context(|| format!("assembling house at '{}'", self.address))
    }
}

/// Three rooms on one floor behind a default metal door.
pub fn kyiv_plan() -> HousePlan {
    HousePlan {
        address: "Kyiv, Khreschatyk",
        floor_area: 75.0,
        rooms: 3,
        floors: 1,
        entry_door: LockableDoor::default(),
        room_doors: 5,
        windows: 12,
    }
}

/// Five rooms on two floors behind a sliding glass door.
pub fn lviv_plan() -> Result<HousePlan> {
    let entry_door = LockableDoor::new(
        Material::new("Metal")?,
        Color::new("Brown")?,
        OpeningType::Sliding,
        true,
    );
    Ok(HousePlan {
        address: "Lviv, prosp. Svobody",
        floor_area: 125.0,
        rooms: 5,
        floors: 2,
        entry_door,
        room_doors: 8,
        windows: 16,
    })
}
