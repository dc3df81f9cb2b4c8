/// Port for choosing one of several variants.
pub trait VariantPicker {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}
