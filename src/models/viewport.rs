//! Viewport and surface selection types.

/// Coarse device/input category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewportClass {
    /// Wide viewport with fine pointer (also the non-browser fallback)
    #[default]
    Desktop,
    /// Narrow or touch-capable viewport
    Mobile,
}

impl ViewportClass {
    /// The primary navigation surface mounted for this class.
    pub fn primary_surface(self) -> PrimarySurface {
        match self {
            Self::Desktop => PrimarySurface::FloatingNav,
            Self::Mobile => PrimarySurface::MobileDrawer,
        }
    }
}

/// Which primary navigation surface is mounted. Never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimarySurface {
    FloatingNav,
    MobileDrawer,
}
