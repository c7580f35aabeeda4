//! Curried record accessors.

use sequent_types::{FieldError, Record};

/// Builds a reusable accessor for the field called `name`.
///
/// `get` is curried: it closes over the field name and returns a unary
/// function from record to value, ready to hand to
/// [`try_map`](crate::try_map) or apply directly. The returned closure
/// clones the value out of the record so the record itself stays
/// untouched and reusable.
///
/// # Examples
///
/// ```
/// use sequent_kernel::{get, try_map};
/// use sequent_types::{Record, Sequence};
///
/// let muppets: Sequence<Record<String>> = ["Kermit", "Piggy", "Gonzo"]
///     .iter()
///     .map(|name| Record::new().with_field("name", (*name).to_owned()))
///     .collect();
///
/// let names = try_map(get("name"), &muppets).expect("every record has a name");
/// assert_eq!(
///     names,
///     Sequence::from(["Kermit".to_owned(), "Piggy".to_owned(), "Gonzo".to_owned()]),
/// );
/// ```
///
/// # Errors
///
/// The returned closure yields [`FieldError::Missing`] when applied to a
/// record without the field.
pub fn get<V: Clone>(name: impl Into<String>) -> impl Fn(&Record<V>) -> Result<V, FieldError> {
    let name = name.into();
    move |record| record.field(&name).cloned()
}
