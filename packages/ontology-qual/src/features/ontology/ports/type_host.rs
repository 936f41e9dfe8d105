/// Host framework's static types, queried only for defaulting.
pub trait TypeHost {
    type Type;

    fn is_fixed_size_array(&self, ty: &Self::Type) -> bool;

    /// Whether `ty` is the declared type with fully qualified `name`
    fn is_declared_of_name(&self, ty: &Self::Type, name: &str) -> bool;
}
