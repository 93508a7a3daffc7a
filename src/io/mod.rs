//! JSON files shared with the surrounding editor.

mod map_data;

pub use map_data::{
    load_map_data, save_map_data, save_triangles, MapData, TriangleData, TriangleRecord,
    VertexRecord,
};
