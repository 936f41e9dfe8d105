//! Qualifier adapter
//!
//! Translates between `QualifierSet` and the host's annotations, and picks
//! a default qualifier for an unannotated host type. No lattice logic lives
//! here; joins are delegated to the domain.

use super::context::OntologyContext;
use crate::errors::{OntologyError, Result};
use crate::features::ontology::domain::{self, OntologyValue, QualifierSet};
use crate::features::ontology::ports::{AnnotationHost, TypeHost};
use crate::shared::macros::debug;

/// Borrowing view over an [`OntologyContext`]; cheap to create per call site.
pub struct QualifierAdapter<'a, H: AnnotationHost> {
    context: &'a OntologyContext<H>,
}

impl<'a, H: AnnotationHost> Clone for QualifierAdapter<'a, H> {
    fn clone(&self) -> Self {
        Self {
            context: self.context,
        }
    }
}

impl<'a, H: AnnotationHost> QualifierAdapter<'a, H> {
    pub fn new(context: &'a OntologyContext<H>) -> Self {
        Self { context }
    }

    /// Default value for a host type: `SEQUENCE` for arrays and configured
    /// ordered containers, `TOP` otherwise. Never fails.
    pub fn classify_host_type<T: TypeHost>(&self, types: &T, ty: &T::Type) -> OntologyValue {
        let config = self.context.config();

        if config.arrays_are_sequences && types.is_fixed_size_array(ty) {
            return OntologyValue::Sequence;
        }
        if config
            .sequence_types
            .iter()
            .any(|name| types.is_declared_of_name(ty, name))
        {
            return OntologyValue::Sequence;
        }
        // cannot determine a kind from the type alone
        OntologyValue::Top
    }

    pub fn default_qualifier<T: TypeHost>(&self, types: &T, ty: &T::Type) -> Result<QualifierSet> {
        QualifierSet::single(self.classify_host_type(types, ty))
    }

    /// Explicit annotation if there is one, otherwise the type's default
    pub fn qualifier_for<T: TypeHost>(
        &self,
        explicit: Option<&H::Annotation>,
        types: &T,
        ty: &T::Type,
    ) -> Result<QualifierSet> {
        match explicit {
            Some(annotation) => self.from_annotation(annotation),
            None => self.default_qualifier(types, ty),
        }
    }

    pub fn to_annotation(&self, set: &QualifierSet) -> Result<H::Annotation> {
        self.context.encode(set)
    }

    /// Decode and validate the declared values of a qualifier annotation.
    ///
    /// An absent, empty, or hole-containing list is `InvalidQualifier`; it
    /// is never coerced to TOP.
    pub fn from_annotation(&self, annotation: &H::Annotation) -> Result<QualifierSet> {
        let declared = self.declared_values(annotation)?;
        QualifierSet::from_raw(declared.as_deref())
    }

    /// Raw declared values, labels parsed but not validated
    pub fn declared_values(
        &self,
        annotation: &H::Annotation,
    ) -> Result<Option<Vec<Option<OntologyValue>>>> {
        let labels = self
            .context
            .host()
            .element_values(annotation, &self.context.config().values_element)
            .map_err(OntologyError::host)?;

        let Some(labels) = labels else {
            return Ok(None);
        };

        let mut values = Vec::with_capacity(labels.len());
        for label in &labels {
            match label {
                Some(label) => match OntologyValue::from_label(label) {
                    Some(value) => values.push(Some(value)),
                    None => {
                        debug!("unknown ontology label '{}' in {:?}", label, labels);
                        return Err(OntologyError::invalid_qualifier(&labels));
                    }
                },
                None => values.push(None),
            }
        }
        Ok(Some(values))
    }

    /// Same kind as `ONTOLOGY`, values ignored
    pub fn same_qualifier_kind(&self, annotation: &H::Annotation) -> Result<bool> {
        let annotations = self.context.annotations()?;
        Ok(self
            .context
            .host()
            .same_kind_ignoring_values(annotation, &annotations.ontology))
    }

    /// TOP under this domain; false for annotations of another kind.
    ///
    /// An annotation declaring no values counts as TOP. A list with a hole
    /// is `InvalidQualifier`, as in `from_annotation`.
    pub fn is_top(&self, annotation: &H::Annotation) -> Result<bool> {
        if !self.same_qualifier_kind(annotation)? {
            return Ok(false);
        }
        let values = self.present_values(annotation)?;
        Ok(domain::is_top(&values))
    }

    /// BOTTOM under this domain; false for annotations of another kind.
    pub fn is_bottom(&self, annotation: &H::Annotation) -> Result<bool> {
        if !self.same_qualifier_kind(annotation)? {
            return Ok(false);
        }
        let values = self.present_values(annotation)?;
        Ok(domain::is_bottom(&values))
    }

    /// Join two qualifier annotations (`a` first; see `least_upper_bound`)
    pub fn lub_annotations(&self, a: &H::Annotation, b: &H::Annotation) -> Result<H::Annotation> {
        let a = self.from_annotation(a)?;
        let b = self.from_annotation(b)?;
        self.to_annotation(&domain::least_upper_bound(&a, &b))
    }

    /// Declared values for the TOP/BOTTOM checks: absent or empty reads as
    /// no values, a hole is an error.
    fn present_values(&self, annotation: &H::Annotation) -> Result<Vec<OntologyValue>> {
        let declared = self.declared_values(annotation)?.unwrap_or_default();
        if declared.iter().any(Option::is_none) {
            debug!("hole in declared ontology values: {:?}", declared);
            return Err(OntologyError::invalid_qualifier(Some(&declared)));
        }
        Ok(declared.into_iter().flatten().collect())
    }
}
