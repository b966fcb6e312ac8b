// Geometry primitives of the `landpost_geometry` crate: coordinates, rings, lines and
// polygons plus their multi-geometry counterparts. All of them serialize to the bare
// GeoJSON coordinate arrays; the `type` tag lives on `Geometry`.

mod coordinates;
mod linestring;
mod macros;
mod multi;
mod polygon;
mod ring;

pub use coordinates::*;
pub use linestring::*;
pub use multi::*;
pub use polygon::*;
pub use ring::*;
