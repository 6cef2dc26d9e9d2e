#[derive(Debug)]
pub struct Version(pub &'static str);
