//! Sound groups
//!
//! Custom blocks are disguised as note blocks, which would otherwise all
//! sound like wood. Each definition carries the sound group the host should
//! play instead.

use std::fmt;

/// A sound for the host to play at a location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundEvent {
    pub sound: &'static str,
    pub volume: f32,
    pub pitch: f32,
}

/// Place/break/hit/step/fall sounds of one material family
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundGroup {
    pub name: &'static str,
    pub place: &'static str,
    pub breaking: &'static str,
    pub hit: &'static str,
    pub step: &'static str,
    pub fall: &'static str,
    pub volume: f32,
    pub pitch: f32,
}

impl SoundGroup {
    pub const WOOD: SoundGroup = SoundGroup::vanilla(
        "wood",
        "block.wood.place",
        "block.wood.break",
        "block.wood.hit",
        "block.wood.step",
        "block.wood.fall",
    );
    pub const STONE: SoundGroup = SoundGroup::vanilla(
        "stone",
        "block.stone.place",
        "block.stone.break",
        "block.stone.hit",
        "block.stone.step",
        "block.stone.fall",
    );
    pub const WOOL: SoundGroup = SoundGroup::vanilla(
        "wool",
        "block.wool.place",
        "block.wool.break",
        "block.wool.hit",
        "block.wool.step",
        "block.wool.fall",
    );
    pub const GLASS: SoundGroup = SoundGroup::vanilla(
        "glass",
        "block.glass.place",
        "block.glass.break",
        "block.glass.hit",
        "block.glass.step",
        "block.glass.fall",
    );
    pub const METAL: SoundGroup = SoundGroup::vanilla(
        "metal",
        "block.metal.place",
        "block.metal.break",
        "block.metal.hit",
        "block.metal.step",
        "block.metal.fall",
    );
    pub const GRAVEL: SoundGroup = SoundGroup::vanilla(
        "gravel",
        "block.gravel.place",
        "block.gravel.break",
        "block.gravel.hit",
        "block.gravel.step",
        "block.gravel.fall",
    );

    const fn vanilla(
        name: &'static str,
        place: &'static str,
        breaking: &'static str,
        hit: &'static str,
        step: &'static str,
        fall: &'static str,
    ) -> Self {
        Self {
            name,
            place,
            breaking,
            hit,
            step,
            fall,
            volume: 1.0,
            pitch: 1.0,
        }
    }

    fn event(&self, sound: &'static str, volume_scale: f32, pitch_scale: f32) -> SoundEvent {
        SoundEvent {
            sound,
            volume: self.volume * volume_scale,
            pitch: self.pitch * pitch_scale,
        }
    }

    pub fn place_sound(&self) -> SoundEvent {
        self.event(self.place, 1.0, 0.8)
    }

    pub fn break_sound(&self) -> SoundEvent {
        self.event(self.breaking, 1.0, 0.8)
    }

    pub fn hit_sound(&self) -> SoundEvent {
        self.event(self.hit, 0.5, 0.5)
    }

    pub fn step_sound(&self) -> SoundEvent {
        self.event(self.step, 0.3, 1.0)
    }

    pub fn fall_sound(&self) -> SoundEvent {
        self.event(self.fall, 0.5, 0.75)
    }
}

impl fmt::Display for SoundGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
