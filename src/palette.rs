//! Color tables for palette-indexed rasters.

/// One palette entry. Alpha defaults to opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PaletteEntry {
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Ordered color table; raster samples index into it.
#[derive(Clone, Debug, Default)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any entry is non-opaque. Controls the transparency chunk:
    /// emitted if and only if this is true.
    pub fn has_translucency(&self) -> bool {
        self.entries.iter().any(|e| e.a != 255)
    }

    /// RGB triples in index order (PLTE payload).
    pub(crate) fn plte_payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(self.entries.len() * 3);
        for entry in &self.entries {
            payload.push(entry.r);
            payload.push(entry.g);
            payload.push(entry.b);
        }
        payload
    }

    /// One alpha per entry in index order (tRNS payload). Entries
    /// without explicit translucency stay 255.
    pub(crate) fn trns_payload(&self) -> Vec<u8> {
        self.entries.iter().map(|e| e.a).collect()
    }
}

#[cfg(feature = "rgb")]
impl Palette {
    /// Build an all-opaque palette from typed RGB colors.
    pub fn from_rgb_entries(colors: &[rgb::RGB8]) -> Self {
        Self::new(
            colors
                .iter()
                .map(|c| PaletteEntry::opaque(c.r, c.g, c.b))
                .collect(),
        )
    }

    /// Build a palette from typed RGBA colors, keeping per-entry alpha.
    pub fn from_rgba_entries(colors: &[rgb::RGBA8]) -> Self {
        Self::new(
            colors
                .iter()
                .map(|c| PaletteEntry::with_alpha(c.r, c.g, c.b, c.a))
                .collect(),
        )
    }
}
