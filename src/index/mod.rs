pub mod knn;
pub mod matrix;
pub mod mmr;
