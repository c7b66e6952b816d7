use crate::common::value;
use crate::error::{Error, Result};

use aws_sdk_dynamodb::{operation, types};
use serde::Serialize;
use serde_dynamo::to_attribute_value;
use serde_json::Number;
use std::collections;

/// Ordered key-selection clause: key names paired with their values.
pub type KeyClause = Vec<(String, types::AttributeValue)>;

/// Target a primary key can be rendered into.
///
/// Implemented for the ordered [`KeyClause`], for plain hash maps and for the
/// SDK fluent builders of the key-addressed operations.
pub trait KeySelector: Sized {
    /// Add one key component to the selector.
    fn add_key(self, name: String, value: types::AttributeValue) -> Self;
}

impl KeySelector for KeyClause {
    fn add_key(mut self, name: String, value: types::AttributeValue) -> Self {
        self.push((name, value));
        self
    }
}

impl KeySelector for collections::HashMap<String, types::AttributeValue> {
    fn add_key(mut self, name: String, value: types::AttributeValue) -> Self {
        self.insert(name, value);
        self
    }
}

macro_rules! impl_key_selector_for_builder {
    ($($builder:ty),+ $(,)?) => {
        $(
            impl KeySelector for $builder {
                fn add_key(self, name: String, value: types::AttributeValue) -> Self {
                    self.key(name, value)
                }
            }
        )+
    };
}

impl_key_selector_for_builder!(
    operation::get_item::builders::GetItemFluentBuilder,
    operation::update_item::builders::UpdateItemFluentBuilder,
    operation::delete_item::builders::DeleteItemFluentBuilder,
);

/// Primary key built from named string or number components.
///
/// Components keep their insertion order, which is the order they are rendered in.
/// Duplicate names are not checked here; they render as two clauses and are
/// rejected by the store client.
///
/// ```rust
/// use dynamodb_document::common::key;
///
/// let mut primary_key = key::PrimaryKey::new();
/// primary_key
///     .add_string_key("pk", "user#1")
///     .add_number_key("version", 3);
/// let clause = primary_key.render_into(key::KeyClause::new());
/// assert_eq!(clause[0].0, "pk");
/// assert_eq!(clause[1].0, "version");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrimaryKey {
    components: KeyClause,
    non_finite: Vec<String>,
}

/// Numeric primitive accepted as a number key component.
///
/// Implemented for every integer and float primitive and for [`Number`].
pub trait KeyNumber {
    /// The value as a JSON number, or `None` for NaN and infinities.
    fn into_number(self) -> Option<Number>;
}

macro_rules! impl_key_number_for_integer {
    ($($integer:ty),+ $(,)?) => {
        $(
            impl KeyNumber for $integer {
                fn into_number(self) -> Option<Number> {
                    Some(Number::from(self))
                }
            }
        )+
    };
}

impl_key_number_for_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl KeyNumber for f64 {
    fn into_number(self) -> Option<Number> {
        Number::from_f64(self)
    }
}

impl KeyNumber for f32 {
    fn into_number(self) -> Option<Number> {
        // Widening keeps binary noise (0.1f32 is 0.10000000149011612f64); the
        // shortest f32 text does not.
        self.to_string()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
    }
}

impl KeyNumber for Number {
    fn into_number(self) -> Option<Number> {
        Some(self)
    }
}

impl PrimaryKey {
    /// Create an empty primary key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a string-valued key component.
    pub fn add_string_key(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.components
            .push((name.into(), types::AttributeValue::S(value.into())));
        self
    }

    /// Append a number-valued key component.
    ///
    /// Takes any integer or float primitive. NaN and infinities have no stored
    /// form: they are left out of the rendered key and make [`PrimaryKey::check`] fail.
    pub fn add_number_key(&mut self, name: impl Into<String>, value: impl KeyNumber) -> &mut Self {
        let name = name.into();
        match value.into_number() {
            Some(number) => self.components.push((name, value::encode_number(&number))),
            None => self.non_finite.push(name),
        }
        self
    }

    /// The accumulated components, in insertion order.
    pub fn components(&self) -> &[(String, types::AttributeValue)] {
        &self.components
    }

    /// Whether no component was added yet.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.non_finite.is_empty()
    }

    /// Make sure the key can address an item: at least one component, and every
    /// number component finite.
    ///
    /// ```rust
    /// use dynamodb_document::common::key;
    ///
    /// let mut primary_key = key::PrimaryKey::new();
    /// assert!(primary_key.check().is_err());
    /// primary_key.add_number_key("version", f64::NAN);
    /// assert!(primary_key.check().is_err());
    /// ```
    pub fn check(&self) -> Result<()> {
        if let Some(name) = self.non_finite.first() {
            return Err(Error::InvalidArgument(format!(
                "key `{name}` must be a finite number"
            )));
        }
        if self.is_empty() {
            return Err(Error::InvalidArgument(
                "primary key has no components".to_string(),
            ));
        }
        Ok(())
    }

    /// Write every component into `selector`, in insertion order.
    ///
    /// The key itself is left untouched, so it can be rendered into several requests.
    pub fn render_into<S: KeySelector>(&self, selector: S) -> S {
        self.components
            .iter()
            .fold(selector, |selector, (name, value)| {
                selector.add_key(name.clone(), value.clone())
            })
    }
}

/// Key component.
///
/// ```rust
/// use dynamodb_document::common::key;
///
/// let key = key::Key {
///     name: "id".to_string(),
///     value: "1".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Key<T> {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: T,
}

/// Primary key (partition key and optional sort key) with serializable values.
///
/// ```rust
/// use dynamodb_document::common::key;
///
/// let keys = key::Keys {
///     partition_key: key::Key {
///         name: "id".to_string(),
///         value: "1".to_string(),
///     },
///     ..Default::default()
/// };
/// let primary_key: key::PrimaryKey = keys.try_into().unwrap();
/// assert_eq!(primary_key.components().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Keys<T> {
    /// The partition key (required).
    pub partition_key: Key<T>,
    /// The sort key (optional, only for tables with composite primary keys).
    pub sort_key: Option<Key<T>>,
}

fn key_component<T: Serialize>(key: Key<T>) -> Result<(String, types::AttributeValue)> {
    let value: types::AttributeValue = to_attribute_value(key.value)?;
    match value {
        types::AttributeValue::S(_) | types::AttributeValue::N(_) => Ok((key.name, value)),
        _ => Err(Error::InvalidArgument(format!(
            "key `{}` must be a string or a number",
            key.name
        ))),
    }
}

impl<T: Serialize> TryFrom<Keys<T>> for PrimaryKey {
    type Error = Error;

    fn try_from(keys: Keys<T>) -> Result<Self> {
        let mut components = vec![key_component(keys.partition_key)?];
        if let Some(sort_key) = keys.sort_key {
            components.push(key_component(sort_key)?);
        }
        Ok(Self {
            components,
            non_finite: Vec::new(),
        })
    }
}
