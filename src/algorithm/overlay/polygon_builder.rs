use super::edge_list::EdgeList;
use super::graph::{DirEdgeId, OverlayGraph};
use crate::algorithm::area::twice_signed_ring_area;
use crate::algorithm::coordinate_position::{coord_pos_relative_to_ring, CoordPos};
use crate::geometry::{Coord, Envelope, LineString};
use crate::{Error, GeoFloat, Result};

/// A closed loop of directed edges bounding a face of the overlay result.
pub(crate) struct EdgeRing<F: GeoFloat> {
    pub coords: Vec<Coord<F>>,
    pub is_hole: bool,
    /// the shell this hole was assigned to, as an index into the shell list
    pub shell: Option<usize>,
}

impl<F: GeoFloat> EdgeRing<F> {
    fn new(coords: Vec<Coord<F>>) -> Self {
        // rings are linked with their face to the right, so shells come out
        // clockwise; a counter-clockwise ring bounds a hole
        let is_hole = twice_signed_ring_area(&LineString::from_coords(coords.iter().copied()))
            > F::zero();
        EdgeRing {
            coords,
            is_hole,
            shell: None,
        }
    }

    fn envelope(&self) -> Envelope<F> {
        self.coords.iter().copied().collect()
    }
}

/// Assembles the result polygons of an overlay: links the selected directed
/// edges into rings, decomposes rings that touch themselves at nodes into
/// minimal rings, classifies shells and holes, and assigns each hole to its
/// innermost enclosing shell.
pub(crate) struct PolygonBuilder;

impl PolygonBuilder {
    /// Returns each result polygon as its shell ring plus hole rings.
    pub fn build<F: GeoFloat>(
        graph: &mut OverlayGraph<F>,
        edge_list: &EdgeList<F>,
    ) -> Result<Vec<(Vec<Coord<F>>, Vec<Vec<Coord<F>>>)>> {
        graph.link_result_directed_edges()?;

        let maximal_rings = build_maximal_rings(graph)?;

        let mut shells: Vec<EdgeRing<F>> = vec![];
        let mut free_holes: Vec<EdgeRing<F>> = vec![];

        for (ring_id, dedges) in maximal_rings.into_iter().enumerate() {
            let max_degree = dedges
                .iter()
                .map(|&dedge_id| {
                    let node = graph.dedges[dedge_id].node;
                    graph.outgoing_degree(node, ring_id)
                })
                .max()
                .unwrap_or(0);

            if max_degree > 1 {
                // the ring touches itself at one or more nodes: split it
                // into minimal rings, at most one of which is the shell
                let minimal_rings = build_minimal_rings(graph, edge_list, ring_id, &dedges)?;

                let mut shell: Option<EdgeRing<F>> = None;
                let mut holes = vec![];
                for ring in minimal_rings {
                    if ring.is_hole {
                        holes.push(ring);
                    } else if shell.is_some() {
                        return Err(Error::topology(
                            "found two shells in a minimal ring decomposition",
                        ));
                    } else {
                        shell = Some(ring);
                    }
                }

                match shell {
                    Some(shell) => {
                        let shell_index = shells.len();
                        shells.push(shell);
                        for mut hole in holes {
                            hole.shell = Some(shell_index);
                            free_holes.push(hole);
                        }
                    }
                    None => free_holes.extend(holes),
                }
            } else {
                let ring = EdgeRing::new(ring_coords(graph, edge_list, &dedges));
                if ring.is_hole {
                    free_holes.push(ring);
                } else {
                    shells.push(ring);
                }
            }
        }

        place_free_holes(&mut free_holes, &shells)?;

        // assemble polygons, discarding degenerate zero-area shells (which
        // arise under snap rounding)
        let mut polygons: Vec<(Vec<Coord<F>>, Vec<Vec<Coord<F>>>)> = shells
            .iter()
            .map(|shell| (shell.coords.clone(), vec![]))
            .collect();
        for hole in free_holes {
            let shell_index = hole
                .shell
                .expect("every hole has a shell after placement");
            polygons[shell_index].1.push(hole.coords);
        }

        polygons.retain(|(shell, _)| {
            twice_signed_ring_area(&LineString::from_coords(shell.iter().copied())) != F::zero()
        });

        Ok(polygons)
    }
}

/// Traverse the `next` links to collect the maximal edge rings: each ring
/// as the list of its directed edges, with `edge_ring` assigned.
fn build_maximal_rings<F: GeoFloat>(graph: &mut OverlayGraph<F>) -> Result<Vec<Vec<DirEdgeId>>> {
    let mut rings = vec![];
    for start in 0..graph.dedges.len() {
        if !graph.dedges[start].in_result
            || !graph.dedges[start].label.is_area()
            || graph.dedges[start].edge_ring.is_some()
        {
            continue;
        }

        let ring_id = rings.len();
        let mut dedges = vec![];
        let mut current = start;
        loop {
            if graph.dedges[current].edge_ring == Some(ring_id) {
                return Err(Error::topology_at(
                    "directed edge visited twice during ring building",
                    graph.dedges[current].origin,
                ));
            }
            dedges.push(current);
            graph.dedges[current].edge_ring = Some(ring_id);
            current = graph.dedges[current].next.ok_or_else(|| {
                Error::topology_at("found null directed edge", graph.dedges[current].origin)
            })?;
            if current == start {
                break;
            }
        }
        rings.push(dedges);
    }
    Ok(rings)
}

/// Split one maximal ring into minimal rings by re-linking at its repeated
/// nodes and traversing the `next_min` links.
fn build_minimal_rings<F: GeoFloat>(
    graph: &mut OverlayGraph<F>,
    edge_list: &EdgeList<F>,
    ring_id: usize,
    dedges: &[DirEdgeId],
) -> Result<Vec<EdgeRing<F>>> {
    for &dedge_id in dedges {
        let node = graph.dedges[dedge_id].node;
        graph.link_minimal_directed_edges(node, ring_id);
    }

    let mut minimal_rings = vec![];
    let mut next_min_ring_id = 0;
    for &start in dedges {
        if graph.dedges[start].min_edge_ring.is_some() {
            continue;
        }
        let min_ring_id = next_min_ring_id;
        next_min_ring_id += 1;

        let mut ring_dedges = vec![];
        let mut current = start;
        loop {
            if graph.dedges[current].min_edge_ring == Some(min_ring_id) {
                return Err(Error::topology_at(
                    "directed edge visited twice during minimal ring building",
                    graph.dedges[current].origin,
                ));
            }
            ring_dedges.push(current);
            graph.dedges[current].min_edge_ring = Some(min_ring_id);
            current = graph.dedges[current].next_min.ok_or_else(|| {
                Error::topology_at(
                    "found null minimal directed edge",
                    graph.dedges[current].origin,
                )
            })?;
            if current == start {
                break;
            }
        }

        minimal_rings.push(EdgeRing::new(ring_coords(graph, edge_list, &ring_dedges)));
    }
    Ok(minimal_rings)
}

/// The closed coordinate loop traced by a list of linked directed edges.
fn ring_coords<F: GeoFloat>(
    graph: &OverlayGraph<F>,
    edge_list: &EdgeList<F>,
    dedges: &[DirEdgeId],
) -> Vec<Coord<F>> {
    let mut coords: Vec<Coord<F>> = vec![];
    for (i, &dedge_id) in dedges.iter().enumerate() {
        let dedge = &graph.dedges[dedge_id];
        let edge_coords = &edge_list.edge(dedge.edge).coords;

        let skip = usize::from(i != 0);
        if dedge.forward {
            coords.extend(edge_coords.iter().skip(skip));
        } else {
            coords.extend(edge_coords.iter().rev().skip(skip));
        }
    }
    coords
}

/// Assign each unassigned hole to the smallest shell containing it.
fn place_free_holes<F: GeoFloat>(
    holes: &mut [EdgeRing<F>],
    shells: &[EdgeRing<F>],
) -> Result<()> {
    let shell_rings: Vec<(LineString<F>, Envelope<F>)> = shells
        .iter()
        .map(|shell| {
            (
                LineString::from_coords(shell.coords.iter().copied()),
                shell.envelope(),
            )
        })
        .collect();

    for hole in holes.iter_mut() {
        if hole.shell.is_some() {
            continue;
        }

        let hole_envelope = hole.envelope();
        // a test point that is not also a vertex of the candidate shell
        // avoids inconclusive on-boundary results
        let mut min_shell: Option<usize> = None;
        for (shell_index, (shell_ring, shell_envelope)) in shell_rings.iter().enumerate() {
            if !shell_envelope.contains_envelope(&hole_envelope) {
                continue;
            }

            let test_point = hole
                .coords
                .iter()
                .find(|coord| !shells[shell_index].coords.contains(coord))
                .or(hole.coords.first())
                .copied();
            let Some(test_point) = test_point else {
                continue;
            };

            if coord_pos_relative_to_ring(test_point, shell_ring) == CoordPos::Outside {
                continue;
            }

            let is_smaller = match min_shell {
                None => true,
                Some(current) => shell_rings[current]
                    .1
                    .contains_envelope(shell_envelope),
            };
            if is_smaller {
                min_shell = Some(shell_index);
            }
        }

        match min_shell {
            Some(shell_index) => hole.shell = Some(shell_index),
            None => {
                return Err(Error::topology_at(
                    "unable to assign hole to a shell",
                    *hole.coords.first().expect("ring is never empty"),
                ))
            }
        }
    }
    Ok(())
}
