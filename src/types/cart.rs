//! Line item and cart mutation payloads

use serde::Serialize;
use serde::ser::SerializeMap;
use std::collections::BTreeMap;

/// A purchasable line destined for `/cart/add.js`.
///
/// Quantity defaults to 1; custom properties and a selling plan are attached
/// only when explicitly provided.
///
/// # Example
///
/// ```rust
/// use cartkit::LineItem;
///
/// let item = LineItem::new(39887860530)
///     .quantity(2)
///     .property("Engraving", "MAX")
///     .selling_plan(183238717);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// Variant identifier of the product to add.
    pub id: u64,

    /// Number of units. Zero is valid and is always sent.
    pub quantity: u32,

    /// Custom line-item properties.
    #[serde(
        rename = "lineItemProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub properties: Option<BTreeMap<String, String>>,

    /// Subscription/installment plan identifier.
    #[serde(rename = "sellingPlan", skip_serializing_if = "Option::is_none")]
    pub selling_plan: Option<u64>,
}

impl LineItem {
    /// Create a line item for a variant with quantity 1.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            quantity: 1,
            properties: None,
            selling_plan: None,
        }
    }

    /// Set the quantity.
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Attach a single custom property.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replace the full set of custom properties.
    pub fn properties(mut self, properties: BTreeMap<String, String>) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Attach a selling plan.
    pub fn selling_plan(mut self, selling_plan: u64) -> Self {
        self.selling_plan = Some(selling_plan);
        self
    }
}

/// The line a `/cart/change.js` request targets.
///
/// The three addressing modes of the endpoint, as one tagged value: exactly
/// one identifier field ever appears in the outgoing body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineTarget {
    /// A specific cart line, by its unique line-item key. Serialized under
    /// `id`.
    Key(String),

    /// A 1-based position in the cart. Serialized under `line`.
    Index(u32),

    /// Every line matching a variant identifier. Serialized under `id`.
    Variant(u64),
}

/// A change to a cart line, destined for `/cart/change.js`.
///
/// # Example
///
/// ```rust
/// use cartkit::CartChange;
///
/// // Remove the third line from the cart.
/// let change = CartChange::by_index(3, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartChange {
    /// Which line(s) the change applies to.
    pub target: LineTarget,

    /// New quantity for the targeted line(s). Zero removes them.
    pub quantity: u32,

    /// Custom line-item properties to set alongside the change.
    pub properties: Option<BTreeMap<String, String>>,

    /// Subscription/installment plan identifier.
    pub selling_plan: Option<u64>,
}

impl CartChange {
    /// Create a change for the given target and quantity.
    pub fn new(target: LineTarget, quantity: u32) -> Self {
        Self {
            target,
            quantity,
            properties: None,
            selling_plan: None,
        }
    }

    /// Target a specific line by its line-item key.
    pub fn by_key(key: impl Into<String>, quantity: u32) -> Self {
        Self::new(LineTarget::Key(key.into()), quantity)
    }

    /// Target a line by its 1-based position in the cart.
    pub fn by_index(line: u32, quantity: u32) -> Self {
        Self::new(LineTarget::Index(line), quantity)
    }

    /// Target all lines matching a variant identifier.
    pub fn by_variant(variant_id: u64, quantity: u32) -> Self {
        Self::new(LineTarget::Variant(variant_id), quantity)
    }

    /// Attach a single custom property.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Attach a selling plan.
    pub fn selling_plan(mut self, selling_plan: u64) -> Self {
        self.selling_plan = Some(selling_plan);
        self
    }
}

// The identifier key depends on the target kind, so the body is assembled by
// hand rather than derived.
impl Serialize for CartChange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let len = 2
            + usize::from(self.properties.is_some())
            + usize::from(self.selling_plan.is_some());
        let mut map = serializer.serialize_map(Some(len))?;

        match &self.target {
            LineTarget::Key(key) => map.serialize_entry("id", key)?,
            LineTarget::Index(line) => map.serialize_entry("line", line)?,
            LineTarget::Variant(id) => map.serialize_entry("id", id)?,
        }
        map.serialize_entry("quantity", &self.quantity)?;

        if let Some(properties) = &self.properties {
            map.serialize_entry("lineItemProperties", properties)?;
        }
        if let Some(selling_plan) = &self.selling_plan {
            map.serialize_entry("sellingPlan", selling_plan)?;
        }

        map.end()
    }
}

/// Cart metadata update, destined for `/cart/update.js`.
///
/// Only fields explicitly provided are included in the outgoing body; the
/// remote leaves omitted fields untouched. An update with nothing set
/// serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartUpdate {
    /// Free-form cart note. An empty string is a meaningful value and is
    /// sent when provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Cart-level attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
}

impl CartUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cart note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set a single cart attribute.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replace the full attribute set.
    pub fn attributes(mut self, attributes: BTreeMap<String, String>) -> Self {
        self.attributes = Some(attributes);
        self
    }
}
