#[cfg(test)]
mod queries;
