pub mod note_length;
pub mod primitive;
pub mod quality;
pub mod scale;
pub mod time_signature;
pub mod tonal_vector;
