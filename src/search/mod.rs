mod knn;


pub use knn::{Neighbor, k_nearest, k_nearest_ids};
