pub mod lookup;
pub mod lot;
pub mod operation;
pub mod results;
pub mod usage;

pub use lookup::{DecisionCodeText, MaterialDescription};
pub use lot::InspectionLot;
pub use operation::InspectionOperation;
pub use results::{InspectionCharacteristic, InspectionResult, InspectionResultValue};
pub use usage::InspectionUsageValue;
