use crate::error::BackendError;
use gl::{types::*, *};
use log::info;
use std::ffi::CStr;

pub fn check_gl_err() -> Result<(), BackendError> {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return Ok(());
    }
    Err(BackendError::GlError(err))
}

fn gl_string(name: GLenum) -> String {
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return "<unknown>".to_string();
    }
    unsafe { CStr::from_ptr(ptr.cast()) }
        .to_string_lossy()
        .into_owned()
}

pub fn log_opengl_info() {
    info!("GL_VENDOR = {}", gl_string(VENDOR));
    info!("GL_RENDERER = {}", gl_string(RENDERER));
    info!("GL_VERSION = {}", gl_string(VERSION));
}

pub fn gl_buffer_data_arr_dyn<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            DYNAMIC_DRAW,
        )
    };
}

pub fn gl_buffer_sub_data_arr<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferSubData(
            ARRAY_BUFFER,
            0,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
        )
    };
}

pub fn gl_vertex_attrib_ptr_enab(index: u32, size: u32, stride: u32, pointer: usize) {
    unsafe {
        gl::VertexAttribPointer(
            index,
            size as i32,
            FLOAT,
            FALSE,
            (stride as usize * std::mem::size_of::<f32>()) as i32,
            (pointer * std::mem::size_of::<f32>()) as *const _,
        )
    };
    unsafe { gl::EnableVertexAttribArray(index) };
}
