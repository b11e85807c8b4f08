mod generator;

pub use generator::XmlGenerator;
