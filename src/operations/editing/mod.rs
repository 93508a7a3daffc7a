mod insert_vertex;
mod make_quad;
mod move_vertex;
mod remove_polygon;
mod remove_vertex;

pub use insert_vertex::InsertVertex;
pub use make_quad::MakeQuad;
pub use move_vertex::MoveVertex;
pub use remove_polygon::RemovePolygon;
pub use remove_vertex::RemoveVertex;
