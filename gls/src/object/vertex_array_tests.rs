//! Unit tests for VertexArray

use std::rc::Rc;

use crate::device::consts;
use crate::device::mock_device::MockDevice;
use crate::device::{ActiveVariable, NULL_NAME};
use crate::object::{AttributeFormat, Buffer, Program, VertexArray, VertexShader};

fn device() -> Rc<MockDevice> {
    Rc::new(MockDevice::new())
}

#[test]
fn test_bind_attribute_sequence() {
    let device = device();
    let vao = VertexArray::new(device.clone());
    let buffer: Buffer<MockDevice> = Buffer::new(device.clone());
    device.clear_calls();

    let format = AttributeFormat {
        size: 3,
        ty: consts::FLOAT,
        normalized: false,
        stride: 24,
        offset: 12,
    };
    vao.bind_attribute(2, &buffer, format);

    assert_eq!(
        device.calls(),
        vec![
            format!("bind_vertex_array({})", vao.name()),
            format!("bind_buffer({}, {})", consts::ARRAY_BUFFER, buffer.name()),
            "enable_vertex_attrib_array(2)".to_string(),
            format!("vertex_attrib_pointer(2, 3, {}, false, 24, 12)", consts::FLOAT),
            format!("bind_buffer({}, 0)", consts::ARRAY_BUFFER),
            "bind_vertex_array(0)".to_string(),
        ]
    );
}

#[test]
fn test_bind_program_attribute_resolves_location() {
    let device = device();
    *device.attributes.borrow_mut() = vec![ActiveVariable {
        name: "uv".to_string(),
        location: 5,
        gl_type: 0x8B50,
        size: 1,
    }];
    let shader = VertexShader::new(device.clone());
    let mut program = Program::new(device.clone());
    assert!(program.link(&[&shader]));
    let vao = VertexArray::new(device.clone());
    let buffer: Buffer<MockDevice> = Buffer::new(device.clone());
    device.clear_calls();

    vao.bind_program_attribute(&program, "uv", &buffer, AttributeFormat::float(2));
    assert!(device.has_call("enable_vertex_attrib_array(5)"));

    // Unknown attribute: no GL traffic at all
    device.clear_calls();
    vao.bind_program_attribute(&program, "normal", &buffer, AttributeFormat::float(3));
    vao.unbind_program_attribute(&program, "normal");
    assert!(device.calls().is_empty());

    vao.unbind_program_attribute(&program, "uv");
    assert!(device.has_call("disable_vertex_attrib_array(5)"));
}

#[test]
fn test_clear_attribute_bindings_uses_max_attribs() {
    let device = device();
    device.integers.borrow_mut().insert(consts::MAX_VERTEX_ATTRIBS, 4);
    let vao = VertexArray::new(device.clone());
    device.clear_calls();

    vao.clear_attribute_bindings();

    assert_eq!(device.count_calls("disable_vertex_attrib_array"), 4);
    assert!(device.has_call("disable_vertex_attrib_array(3)"));
    assert_eq!(device.calls().last().unwrap(), "bind_vertex_array(0)");
}

#[test]
fn test_index_buffer_binding_order() {
    let device = device();
    let vao = VertexArray::new(device.clone());
    let indices: Buffer<MockDevice, { consts::ELEMENT_ARRAY_BUFFER }> = Buffer::new(device.clone());
    device.clear_calls();

    vao.bind_index_buffer(&indices);

    let calls = device.calls();
    assert_eq!(calls[1], format!("bind_buffer({}, {})", consts::ELEMENT_ARRAY_BUFFER, indices.name()));
    assert_eq!(calls[2], "bind_vertex_array(0)");
    assert_eq!(calls[3], format!("bind_buffer({}, 0)", consts::ELEMENT_ARRAY_BUFFER));
    assert_eq!(device.bound(consts::ELEMENT_ARRAY_BUFFER), NULL_NAME);

    device.clear_calls();
    vao.unbind_index_buffer();
    assert_eq!(device.calls()[1], format!("bind_buffer({}, 0)", consts::ELEMENT_ARRAY_BUFFER));
}

#[test]
fn test_drop_deletes_vertex_array() {
    let device = device();
    let name = VertexArray::new(device.clone()).name();

    assert!(device.has_call(&format!("delete_vertex_arrays({})", name)));
}
