/// Host framework's annotation representation.
///
/// The domain never looks inside an annotation; it only builds one from a
/// kind and a label list, reads a label list back, and compares kinds.
pub trait AnnotationHost: Send + Sync {
    type Annotation: Clone + std::fmt::Debug + Send + Sync;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Value-less handle for the annotation kind registered under `name`
    fn annotation_kind(&self, name: &str) -> Result<Self::Annotation, Self::Error>;

    /// Build an annotation of `kind` with `element` set to `labels`
    fn build(
        &self,
        kind: &str,
        element: &str,
        labels: &[&str],
    ) -> Result<Self::Annotation, Self::Error>;

    /// Declared labels of `element`, as the host stores them.
    ///
    /// `None` when the element is absent; `None` entries are holes in the list.
    fn element_values(
        &self,
        annotation: &Self::Annotation,
        element: &str,
    ) -> Result<Option<Vec<Option<String>>>, Self::Error>;

    /// Same annotation kind, ignoring element values
    fn same_kind_ignoring_values(&self, a: &Self::Annotation, b: &Self::Annotation) -> bool;
}
