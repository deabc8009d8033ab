/// Coordinate-wise mean of the member vectors, `None` when there are none.
pub fn compute_centroid(members: &[&[f64]]) -> Option<Vec<f64>> {
    let mut out = vec![0.0; members.first()?.len()];

    for v in members {
        for (o, x) in out.iter_mut().zip(v.iter()) {
            *o += x;
        }
    }

    let n = members.len() as f64;
    for o in out.iter_mut() {
        *o /= n;
    }

    Some(out)
}
