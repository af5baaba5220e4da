pub mod option;
pub mod tree;
pub mod view;

pub use option::DimensionOption;
pub use view::DimensionView;
