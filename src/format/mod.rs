//! Path-Data Import/Export für geglättete Striche.
//!
//! Das Format entspricht dem `d`-Attribut von SVG-Pfaden:
//! ein `M` pro Strich, danach `C` für Kurven und `L` für Linien.

pub mod parser;
pub mod writer;

pub use parser::parse_path_data;
pub use writer::{format_number, write_path_data};
