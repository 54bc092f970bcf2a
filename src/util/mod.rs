pub mod dictionary;
pub mod misc;

#[cfg(test)]
pub mod test;
