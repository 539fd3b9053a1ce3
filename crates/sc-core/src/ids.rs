use core::fmt;
use core::num::NonZeroU32;

/// 1-based layer number labelling rows of an assembled cell table.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<LayerNo>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerNo(NonZeroU32);

impl LayerNo {
    /// Label the layer at a 0-based stack position by storing position+1.
    pub fn from_position(position: u32) -> Self {
        // position+1 is nonzero
        Self(NonZeroU32::new(position + 1).expect("position+1 is nonzero"))
    }

    /// The 1-based number as written to the cell table.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Recover the 0-based stack position.
    pub fn position(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for LayerNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerNo({})", self.get())
    }
}

impl fmt::Display for LayerNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_no_round_trip_position() {
        for p in [0_u32, 1, 2, 42, 10_000] {
            let no = LayerNo::from_position(p);
            assert_eq!(no.position(), p as usize);
            assert_eq!(no.get(), p + 1);
        }
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(format!("{}", LayerNo::from_position(0)), "1");
        assert_eq!(format!("{}", LayerNo::from_position(6)), "7");
    }

    #[test]
    fn option_layer_no_is_small() {
        // This is a classic reason for NonZero: Option<LayerNo> can be same size as LayerNo.
        assert_eq!(
            core::mem::size_of::<LayerNo>(),
            core::mem::size_of::<Option<LayerNo>>()
        );
    }
}
