use std::marker::PhantomData;

/// A strongly-typed, `String`-named reference to a resource (`TResource`)
/// that lives in some other store (`TSource`), without borrowing the store.
/// Dereferencing goes through [`NamedRef::deref()`] with an explicit
/// reference to the `TSource`.
///
/// [`NamedTypeRef`](crate::types::NamedTypeRef) is the main user: type
/// definitions name the types they refer to (field types, implemented
/// interfaces, union members) before those types exist, and the resolved
/// [`Schema`](crate::schema::Schema) owns every type without self-references.
pub struct NamedRef<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source = TSource, RefLocation = TRefLocation>,
> {
    name: String,
    phantom: PhantomData<fn() -> (TSource, TResource)>,
    ref_location: TRefLocation,
}
impl<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source = TSource, RefLocation = TRefLocation>,
> NamedRef<TSource, TRefLocation, TResource> {
    pub fn new(
        name: impl AsRef<str>,
        ref_location: TRefLocation,
    ) -> NamedRef<TSource, TRefLocation, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
            ref_location,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Where the reference was written (not where the resource is defined).
    pub fn ref_location(&self) -> &TRefLocation {
        &self.ref_location
    }

    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }
}
impl<
    TSource,
    TRefLocation: Clone,
    TResource: DerefByName<Source = TSource, RefLocation = TRefLocation>,
> Clone for NamedRef<TSource, TRefLocation, TResource> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            phantom: PhantomData,
            ref_location: self.ref_location.clone(),
        }
    }
}
impl<
    TSource,
    TRefLocation: std::fmt::Debug,
    TResource: DerefByName<Source = TSource, RefLocation = TRefLocation>,
> std::fmt::Debug for NamedRef<TSource, TRefLocation, TResource> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamedRef")
            .field("name", &self.name)
            .field("ref_location", &self.ref_location)
            .finish()
    }
}
impl<
    TSource,
    TRefLocation: PartialEq,
    TResource: DerefByName<Source = TSource, RefLocation = TRefLocation>,
> PartialEq for NamedRef<TSource, TRefLocation, TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.ref_location == other.ref_location
    }
}

/// Implemented by anything that can be looked up by name in a `Source`,
/// which enables [`NamedRef`]s to it.
pub trait DerefByName {
    type Source;
    type RefLocation;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str, ref_location: Self::RefLocation) -> NamedRef<
        Self::Source,
        Self::RefLocation,
        Self,
    > where Self: Sized {
        NamedRef::<Self::Source, Self::RefLocation, Self>::new(
            name,
            ref_location,
        )
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("no definition named `{0}`")]
    DanglingReference(String),
}
