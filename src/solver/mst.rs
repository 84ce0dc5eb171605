use crate::data::Pos;

/// Cost of a minimum spanning tree over `points` using taxicab distance.
///
/// Grows a single tree from the first point (Prim), always attaching the closest
/// remaining point. Ties are resolved by the order of `points` - only the cost is unique.
pub fn mst_cost(points: &[Pos]) -> u16 {
    if points.len() < 2 {
        return 0;
    }

    let mut remaining = points[1..].to_vec();
    // distance of each remaining point to the tree built so far
    let mut dists: Vec<u16> = remaining.iter().map(|p| p.dist(points[0])).collect();
    let mut total = 0;

    while !remaining.is_empty() {
        let mut best = 0;
        for i in 1..dists.len() {
            if dists[i] < dists[best] {
                best = i;
            }
        }
        total += dists[best];
        let added = remaining.remove(best);
        dists.remove(best);
        for (d, p) in dists.iter_mut().zip(&remaining) {
            *d = (*d).min(p.dist(added));
        }
    }

    total
}
