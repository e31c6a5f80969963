bitflags::bitflags! {
    /// Effects switched on for a show. Combine with bitwise OR:
    ///
    /// ```
    /// use stage::StageFlags;
    ///
    /// let flags = StageFlags::LIGHTS | StageFlags::HOLOGRAMS;
    /// assert!(flags.contains(StageFlags::HOLOGRAMS));
    /// assert!(!flags.contains(StageFlags::SMOKE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct StageFlags: u32 {
        const LIGHTS    = 1 << 0;
        const SMOKE     = 1 << 1;
        const HOLOGRAMS = 1 << 2;
    }
}

impl StageFlags {
    /// Whether any of `flags` is switched on.
    pub fn has(self, flags: StageFlags) -> bool {
        self.intersects(flags)
    }

    /// Whether the show needs a holographic stage.
    pub fn is_holographic(self) -> bool {
        self.has(StageFlags::HOLOGRAMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear() {
        let mut flags = StageFlags::empty();
        flags.insert(StageFlags::LIGHTS | StageFlags::HOLOGRAMS);
        assert!(flags.is_holographic());
        assert!(flags.contains(StageFlags::LIGHTS));
        flags.remove(StageFlags::HOLOGRAMS);
        assert!(!flags.is_holographic());
        assert_eq!(flags.bits(), 0b001);
    }

    #[test]
    fn has_matches_any_bit() {
        let flags = StageFlags::LIGHTS;
        assert!(flags.has(StageFlags::LIGHTS | StageFlags::HOLOGRAMS));
        assert!(!flags.contains(StageFlags::LIGHTS | StageFlags::HOLOGRAMS));
        assert!(!flags.has(StageFlags::SMOKE | StageFlags::HOLOGRAMS));
        assert!((StageFlags::SMOKE | StageFlags::HOLOGRAMS).is_holographic());
    }

    #[test]
    fn bits_are_stable() {
        assert_eq!(StageFlags::all().bits(), 0b111);
        assert_eq!(StageFlags::SMOKE.bits(), 2);
    }
}
