//! Physical material parameters of region solids.

// ---------------------------------------------------------------------------
// RegionMaterial
// ---------------------------------------------------------------------------

/// Physically based surface parameters of one region solid.
///
/// Scalars are kept in `[0.0, 1.0]` by [`RegionMaterial::set`]; emissive
/// intensity is only kept non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionMaterial {
    /// Base color in sRGB, components in `[0.0, 1.0]`.
    pub color: [f32; 3],
    /// 0.0 = dielectric, 1.0 = metal.
    pub metalness: f32,
    /// 0.0 = mirror, 1.0 = fully rough.
    pub roughness: f32,
    /// Fraction of light transmitted through the surface.
    pub transmission: f32,
    /// Clear coat layer strength.
    pub clearcoat: f32,
    /// Emitted color.
    pub emissive: [f32; 3],
    /// Multiplier on `emissive`.
    pub emissive_intensity: f32,
}

impl Default for RegionMaterial {
    fn default() -> Self {
        MaterialPreset::Cyber.material()
    }
}

impl RegionMaterial {
    /// Apply one typed property change.
    pub fn set(&mut self, property: MaterialProperty) {
        match property {
            MaterialProperty::Color(c) => self.color = clamp_rgb(c),
            MaterialProperty::Metalness(v) => self.metalness = v.clamp(0.0, 1.0),
            MaterialProperty::Roughness(v) => self.roughness = v.clamp(0.0, 1.0),
            MaterialProperty::Transmission(v) => self.transmission = v.clamp(0.0, 1.0),
            MaterialProperty::Clearcoat(v) => self.clearcoat = v.clamp(0.0, 1.0),
            MaterialProperty::Emissive(c) => self.emissive = clamp_rgb(c),
            MaterialProperty::EmissiveIntensity(v) => self.emissive_intensity = v.max(0.0),
        }
    }

    /// Returns a copy with `property` applied.
    pub fn with(mut self, property: MaterialProperty) -> Self {
        self.set(property);
        self
    }
}

fn clamp_rgb(c: [f32; 3]) -> [f32; 3] {
    c.map(|v| v.clamp(0.0, 1.0))
}

/// Convert a `0xRRGGBB` literal to sRGB floats.
fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

// ---------------------------------------------------------------------------
// MaterialProperty
// ---------------------------------------------------------------------------

/// A single material field and its new value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaterialProperty {
    Color([f32; 3]),
    Metalness(f32),
    Roughness(f32),
    Transmission(f32),
    Clearcoat(f32),
    Emissive([f32; 3]),
    EmissiveIntensity(f32),
}

// ---------------------------------------------------------------------------
// MaterialPreset
// ---------------------------------------------------------------------------

/// Named looks for the region solids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialPreset {
    Cyber,
    Holo,
    Matte,
    Metal,
    Neon,
}

impl MaterialPreset {
    /// Every preset, in menu order.
    pub const ALL: [Self; 5] = [Self::Cyber, Self::Holo, Self::Matte, Self::Metal, Self::Neon];

    /// The material this preset stands for. Emission is always off.
    pub fn material(self) -> RegionMaterial {
        let (color, transmission, metalness, roughness, clearcoat) = match self {
            Self::Cyber => (0x00ffcc, 0.0, 0.0, 0.0, 1.0),
            Self::Holo => (0x88ffff, 0.8, 0.9, 0.1, 0.1),
            Self::Matte => (0x00aa88, 0.0, 0.0, 0.8, 0.0),
            Self::Metal => (0xaaaaaa, 0.0, 1.0, 0.2, 1.0),
            Self::Neon => (0xff00ff, 0.0, 0.0, 0.0, 1.0),
        };
        RegionMaterial {
            color: rgb(color),
            metalness,
            roughness,
            transmission,
            clearcoat,
            emissive: [0.0; 3],
            emissive_intensity: 0.0,
        }
    }

    /// Parse a preset name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Lower-case preset name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cyber => "cyber",
            Self::Holo => "holo",
            Self::Matte => "matte",
            Self::Metal => "metal",
            Self::Neon => "neon",
        }
    }
}
