pub mod operation;

#[cfg(test)]
mod tests;
