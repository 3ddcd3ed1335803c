pub mod comp;
pub mod dest;
pub mod inst;
pub mod jump;
pub mod symbol;
pub mod table;

pub use comp::Comp;
pub use dest::{Dest, Reg};
pub use inst::{Inst, ADDR_MAX};
pub use jump::Jump;
pub use table::{Field, Tables};
