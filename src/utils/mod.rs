pub(crate) mod orient;
pub(crate) mod triangulate;
