/// Vertex layout - attribute descriptors and packed per-vertex stride

use crate::error::{Error, Result};

/// Maximum number of components per vertex attribute accepted by the
/// pipeline's attribute-array state (scalar up to 4-component vector)
pub const MAX_ATTRIBUTE_COMPONENTS: u32 = 4;

/// Numeric element type of a vertex attribute
///
/// This is a closed set: the pipeline's attribute-array state only accepts
/// these three element types. Extending it requires adding both an enum
/// variant and a `size_bytes` table entry, and the compiler enforces that
/// every match stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    /// 32-bit IEEE float
    Float32,
    /// 32-bit unsigned integer
    UInt32,
    /// 8-bit unsigned integer
    UInt8,
}

impl AttributeType {
    /// Size in bytes of one element of this type
    pub fn size_bytes(&self) -> u32 {
        match self {
            AttributeType::Float32 => 4,
            AttributeType::UInt32 => 4,
            AttributeType::UInt8 => 1,
        }
    }
}

/// One vertex attribute: element type, component count, normalization flag
///
/// Immutable once constructed; built by `VertexLayout::push`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Numeric element type
    pub kind: AttributeType,
    /// Number of components (1..=4)
    pub count: u32,
    /// Whether integer data is normalized to [0, 1] when read as float
    pub normalized: bool,
}

impl VertexAttribute {
    /// Total size in bytes of this attribute within one vertex record
    pub fn size_bytes(&self) -> u32 {
        self.count * self.kind.size_bytes()
    }
}

/// Ordered sequence of vertex attributes plus the cumulative byte stride
///
/// The layout is append-only: `push` adds one attribute and grows the
/// stride, so the stride is available in O(1) after every append and can
/// never disagree with the element list. The element list is only exposed
/// as an immutable view.
///
/// # Example
///
/// ```
/// use ember_render::ember::render::{AttributeType, VertexLayout};
///
/// let mut layout = VertexLayout::new();
/// layout.push(AttributeType::Float32, 2)?;
/// layout.push(AttributeType::UInt8, 4)?;
/// assert_eq!(layout.stride(), 12);
/// # Ok::<(), ember_render::ember::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct VertexLayout {
    /// Attribute descriptors, in attach order
    elements: Vec<VertexAttribute>,
    /// Total byte size of one vertex record
    stride: u32,
}

impl VertexLayout {
    /// Create an empty layout (stride 0, no attributes)
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one attribute with `normalized = false`
    ///
    /// Grows the stride by `count * kind.size_bytes()`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedAttribute` when `count` is outside 1..=4;
    /// the attribute-array state has no encoding for such attributes.
    pub fn push(&mut self, kind: AttributeType, count: u32) -> Result<()> {
        self.push_attribute(VertexAttribute {
            kind,
            count,
            normalized: false,
        })
    }

    /// Append one fully-specified attribute
    ///
    /// Same stride and validation rules as `push`.
    pub fn push_attribute(&mut self, attribute: VertexAttribute) -> Result<()> {
        if attribute.count == 0 || attribute.count > MAX_ATTRIBUTE_COMPONENTS {
            return Err(Error::UnsupportedAttribute(format!(
                "{:?} x{} (component count must be 1..={})",
                attribute.kind, attribute.count, MAX_ATTRIBUTE_COMPONENTS
            )));
        }
        self.stride += attribute.size_bytes();
        self.elements.push(attribute);
        Ok(())
    }

    /// Attribute descriptors, in attach order (immutable view)
    pub fn elements(&self) -> &[VertexAttribute] {
        &self.elements
    }

    /// Total byte size of one vertex record
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Iterate over `(attribute, byte offset within the vertex record)`
    ///
    /// Offsets accumulate in attach order starting at 0; backends walk this
    /// during `VertexArray::attach` to register each attribute pointer.
    pub fn iter_with_offsets(&self) -> impl Iterator<Item = (&VertexAttribute, u32)> + '_ {
        self.elements.iter().scan(0u32, |offset, element| {
            let current = *offset;
            *offset += element.size_bytes();
            Some((element, current))
        })
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
