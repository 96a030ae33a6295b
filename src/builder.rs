//! Builder: step-by-step construction of a `House`, with a director that
//! fixes the step order and concrete builders that fix the materials.
//!
//! Each field stays `None` until its step runs, so "not yet built" is
//! distinguishable from any valid value.

use std::fmt;
use std::io::{self, Write};

/// The product under construction. Fields are populated one build step at a
/// time; nothing enforces immutability after retrieval.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct House {
    pub foundation: Option<String>,
    pub walls: Option<String>,
    pub roof: Option<String>,
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "House(foundation={}, walls={}, roof={})",
            self.foundation.as_deref().unwrap_or("None"),
            self.walls.as_deref().unwrap_or("None"),
            self.roof.as_deref().unwrap_or("None"),
        )
    }
}

/// Builder contract: three step operations, each setting exactly one field
/// of the internally owned house, plus a result accessor.
///
/// Concrete builders write fixed literals, so repeating a step overwrites
/// the field with the same value.
pub trait HouseBuilder {
    fn build_foundation(&mut self);
    fn build_walls(&mut self);
    fn build_roof(&mut self);

    /// Hands back the construction result as a finished value. Callable at
    /// any point; steps that have not run leave their fields `None`.
    fn get_result(&self) -> House;
}

#[derive(Default)]
pub struct WoodenHouseBuilder {
    house: House,
}

impl WoodenHouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HouseBuilder for WoodenHouseBuilder {
    fn build_foundation(&mut self) {
        self.house.foundation = Some("ленточный фундамент".to_string());
    }

    fn build_walls(&mut self) {
        self.house.walls = Some("деревянные стены".to_string());
    }

    fn build_roof(&mut self) {
        self.house.roof = Some("двускатная крыша из черепицы".to_string());
    }

    fn get_result(&self) -> House {
        self.house.clone()
    }
}

#[derive(Default)]
pub struct BrickHouseBuilder {
    house: House,
}

impl BrickHouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HouseBuilder for BrickHouseBuilder {
    fn build_foundation(&mut self) {
        self.house.foundation = Some("монолитная плита".to_string());
    }

    fn build_walls(&mut self) {
        self.house.walls = Some("кирпичные стены".to_string());
    }

    fn build_roof(&mut self) {
        self.house.roof = Some("плоская крыша".to_string());
    }

    fn get_result(&self) -> House {
        self.house.clone()
    }
}

/// Sequences a builder's steps in the one fixed order, independent of which
/// concrete builder is supplied. The caller keeps ownership of the builder
/// and retrieves the result from it, not from the director.
pub struct HouseDirector<'a> {
    builder: &'a mut dyn HouseBuilder,
}

impl<'a> HouseDirector<'a> {
    pub fn new(builder: &'a mut dyn HouseBuilder) -> Self {
        HouseDirector { builder }
    }

    /// Runs foundation, then walls, then roof, exactly once each.
    pub fn construct_house(&mut self) {
        self.builder.build_foundation();
        self.builder.build_walls();
        self.builder.build_roof();
    }
}

/// Prints the Builder demo to stdout.
pub fn demo() {
    demo_to(&mut io::stdout()).expect("failed to write demo output");
}

/// Writes the Builder demo lines to `w`.
pub fn demo_to(w: &mut impl Write) -> io::Result<()> {
    let mut wooden_builder = WoodenHouseBuilder::new();
    HouseDirector::new(&mut wooden_builder).construct_house();
    writeln!(w, "Деревянный дом: {}", wooden_builder.get_result())?;

    let mut brick_builder = BrickHouseBuilder::new();
    HouseDirector::new(&mut brick_builder).construct_house();
    writeln!(w, "Кирпичный дом: {}", brick_builder.get_result())?;
    Ok(())
}
