/// Mock renderer for unit tests (no GPU required)
///
/// This mock renderer allows testing layouts, bind-slot transitions and the
/// attach registration sequence without a real graphics context. Each
/// MockRenderer owns its own bind-state table, so tests stay deterministic
/// and can run in parallel.

#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use crate::error::{Error, Result};
#[cfg(test)]
use crate::renderer::{
    AttributeType, IndexBuffer, Renderer, VertexArray, VertexBuffer, VertexLayout,
};

// ============================================================================
// Shared mock state
// ============================================================================

/// One attribute-pointer registration recorded during attach
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRegistration {
    pub slot: u32,
    pub count: u32,
    pub kind: AttributeType,
    pub normalized: bool,
    pub stride: u32,
    pub offset: u32,
}

/// Per-renderer context state: bind slots plus resource bookkeeping
#[cfg(test)]
#[derive(Debug, Default)]
struct MockState {
    next_id: u32,
    bound_vertex_buffer: Option<u32>,
    bound_index_buffer: Option<u32>,
    bound_vertex_array: Option<u32>,
    created: Vec<String>,
    released: Vec<String>,
    registrations: Vec<AttributeRegistration>,
    enabled_slots: Vec<u32>,
    fail_allocations: bool,
}

#[cfg(test)]
impl MockState {
    fn allocate_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

// ============================================================================
// Mock vertex buffer
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockVertexBuffer {
    id: u32,
    size: u64,
    state: Arc<Mutex<MockState>>,
}

#[cfg(test)]
impl VertexBuffer for MockVertexBuffer {
    fn bind(&self) {
        self.state.lock().unwrap().bound_vertex_buffer = Some(self.id);
    }

    fn unbind(&self) {
        self.state.lock().unwrap().bound_vertex_buffer = None;
    }

    fn size_bytes(&self) -> u64 {
        self.size
    }
}

#[cfg(test)]
impl Drop for MockVertexBuffer {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap()
            .released
            .push(format!("vertex_buffer_{}", self.id));
    }
}

// ============================================================================
// Mock index buffer
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockIndexBuffer {
    id: u32,
    count: u32,
    state: Arc<Mutex<MockState>>,
}

#[cfg(test)]
impl IndexBuffer for MockIndexBuffer {
    fn bind(&self) {
        self.state.lock().unwrap().bound_index_buffer = Some(self.id);
    }

    fn unbind(&self) {
        self.state.lock().unwrap().bound_index_buffer = None;
    }

    fn count(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
impl Drop for MockIndexBuffer {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap()
            .released
            .push(format!("index_buffer_{}", self.id));
    }
}

// ============================================================================
// Mock vertex array
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockVertexArray {
    id: u32,
    attribute_count: u32,
    state: Arc<Mutex<MockState>>,
}

#[cfg(test)]
impl VertexArray for MockVertexArray {
    fn attach(&mut self, buffer: &dyn VertexBuffer, layout: &VertexLayout) -> Result<()> {
        self.bind();
        buffer.bind();

        let mut state = self.state.lock().unwrap();
        state.registrations.clear();
        let mut slot = 0u32;
        for (element, offset) in layout.iter_with_offsets() {
            if !state.enabled_slots.contains(&slot) {
                state.enabled_slots.push(slot);
            }
            state.registrations.push(AttributeRegistration {
                slot,
                count: element.count,
                kind: element.kind,
                normalized: element.normalized,
                stride: layout.stride(),
                offset,
            });
            slot += 1;
        }
        // Slots enabled by a previous, wider attachment must not survive.
        state.enabled_slots.retain(|enabled| *enabled < slot);
        self.attribute_count = slot;
        Ok(())
    }

    fn bind(&self) {
        self.state.lock().unwrap().bound_vertex_array = Some(self.id);
    }

    fn unbind(&self) {
        self.state.lock().unwrap().bound_vertex_array = None;
    }

    fn attribute_count(&self) -> u32 {
        self.attribute_count
    }
}

#[cfg(test)]
impl Drop for MockVertexArray {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap()
            .released
            .push(format!("vertex_array_{}", self.id));
    }
}

// ============================================================================
// Mock renderer
// ============================================================================

/// Mock renderer that tracks created and released resources without a GPU
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockRenderer {
    state: Arc<Mutex<MockState>>,
}

#[cfg(test)]
impl MockRenderer {
    /// Create a new mock renderer with empty bind slots
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent create_* call fail with ResourceAllocation
    pub fn fail_allocations(&self, fail: bool) {
        self.state.lock().unwrap().fail_allocations = fail;
    }

    /// Names of created resources, in creation order
    pub fn created(&self) -> Vec<String> {
        self.state.lock().unwrap().created.clone()
    }

    /// Names of released resources, in release order
    pub fn released(&self) -> Vec<String> {
        self.state.lock().unwrap().released.clone()
    }

    /// Attribute registrations recorded by the last attach
    pub fn registrations(&self) -> Vec<AttributeRegistration> {
        self.state.lock().unwrap().registrations.clone()
    }

    /// Currently enabled attribute slots
    pub fn enabled_slots(&self) -> Vec<u32> {
        self.state.lock().unwrap().enabled_slots.clone()
    }

    /// Id in the current-vertex-buffer slot, if any
    pub fn bound_vertex_buffer(&self) -> Option<u32> {
        self.state.lock().unwrap().bound_vertex_buffer
    }

    /// Id in the current-index-buffer slot, if any
    pub fn bound_index_buffer(&self) -> Option<u32> {
        self.state.lock().unwrap().bound_index_buffer
    }

    /// Id in the current-vertex-array slot, if any
    pub fn bound_vertex_array(&self) -> Option<u32> {
        self.state.lock().unwrap().bound_vertex_array
    }
}

#[cfg(test)]
impl Renderer for MockRenderer {
    fn create_vertex_buffer(&self, data: &[u8]) -> Result<Box<dyn VertexBuffer>> {
        let mut state = self.state.lock().unwrap();
        if state.fail_allocations {
            return Err(Error::ResourceAllocation(
                "mock vertex buffer allocation failure".to_string(),
            ));
        }
        let id = state.allocate_id();
        state.created.push(format!("vertex_buffer_{}", id));
        Ok(Box::new(MockVertexBuffer {
            id,
            size: data.len() as u64,
            state: self.state.clone(),
        }))
    }

    fn create_index_buffer(&self, indices: &[u32]) -> Result<Box<dyn IndexBuffer>> {
        let mut state = self.state.lock().unwrap();
        if state.fail_allocations {
            return Err(Error::ResourceAllocation(
                "mock index buffer allocation failure".to_string(),
            ));
        }
        let id = state.allocate_id();
        state.created.push(format!("index_buffer_{}", id));
        Ok(Box::new(MockIndexBuffer {
            id,
            count: indices.len() as u32,
            state: self.state.clone(),
        }))
    }

    fn create_vertex_array(&self) -> Result<Box<dyn VertexArray>> {
        let mut state = self.state.lock().unwrap();
        if state.fail_allocations {
            return Err(Error::ResourceAllocation(
                "mock vertex array allocation failure".to_string(),
            ));
        }
        let id = state.allocate_id();
        state.created.push(format!("vertex_array_{}", id));
        Ok(Box::new(MockVertexArray {
            id,
            attribute_count: 0,
            state: self.state.clone(),
        }))
    }
}

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
