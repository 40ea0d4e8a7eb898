use crate::math::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Material {
    Dirt,
    Grass,
}

impl Material {
    /// Grayscale intensity a fully lit face of this material is drawn with.
    pub fn base_value(self) -> f32 {
        match self {
            Material::Dirt => 100.0,
            Material::Grass => 150.0,
        }
    }
}

/// Integer grid cell a block occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub material: Material,
    pub position: GridPos,
}

impl Block {
    pub const fn new(material: Material, x: i32, y: i32, z: i32) -> Self {
        Self {
            material,
            position: GridPos::new(x, y, z),
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.position.to_vec3()
    }
}

/// A grass cross on the ground plane with a dirt pillar on its -X arm.
pub const DEFAULT_WORLD: [Block; 16] = [
    Block::new(Material::Grass, 0, 0, 0),
    Block::new(Material::Grass, 0, 0, 1),
    Block::new(Material::Grass, 0, 0, 2),
    Block::new(Material::Grass, 0, 0, 3),
    Block::new(Material::Grass, 1, 0, 0),
    Block::new(Material::Grass, 2, 0, 0),
    Block::new(Material::Grass, 3, 0, 0),
    Block::new(Material::Grass, 0, 0, -1),
    Block::new(Material::Grass, 0, 0, -2),
    Block::new(Material::Grass, 0, 0, -3),
    Block::new(Material::Grass, -1, 0, 0),
    Block::new(Material::Grass, -2, 0, 0),
    Block::new(Material::Grass, -3, 0, 0),
    Block::new(Material::Dirt, -3, 1, 0),
    Block::new(Material::Dirt, -3, 2, 0),
    Block::new(Material::Dirt, -3, 3, 0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grass_is_brighter_than_dirt() {
        assert!(Material::Grass.base_value() > Material::Dirt.base_value());
    }

    #[test]
    fn default_world_cells_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for block in DEFAULT_WORLD {
            assert!(seen.insert(block.position), "duplicate {:?}", block.position);
        }
    }
}
