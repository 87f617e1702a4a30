use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("arc index {0} out of range ({1} arcs)")]
    ArcOutOfRange(i64, usize),
}

/// One country's boundary as lon/lat rings. Multipolygons contribute one
/// ring per polygon ring.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRings {
    pub id: String,
    pub rings: Vec<Vec<(f64, f64)>>,
}

#[derive(Debug, Deserialize)]
struct TopologyDoc {
    transform: Option<Transform>,
    arcs: Vec<Vec<[f64; 2]>>,
    objects: Objects,
}

#[derive(Debug, Deserialize)]
struct Transform {
    scale: [f64; 2],
    translate: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct Objects {
    countries: GeometryCollection,
}

#[derive(Debug, Deserialize)]
struct GeometryCollection {
    geometries: Vec<Geometry>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon {
        #[serde(default)]
        id: Option<serde_json::Value>,
        arcs: Vec<Vec<i64>>,
    },
    MultiPolygon {
        #[serde(default)]
        id: Option<serde_json::Value>,
        arcs: Vec<Vec<Vec<i64>>>,
    },
}

/// Decode a quantized topology document into per-country lon/lat rings.
///
/// Quantized arcs are delta-encoded: each position is the running sum of
/// the deltas, scaled and translated by the document transform. Rings
/// reference arcs by index; a negative index means the bitwise complement
/// of the index, traversed in reverse. Junction points shared between
/// consecutive arcs appear once.
pub fn parse_topology(data: &[u8]) -> Result<Vec<CountryRings>, TopologyError> {
    let doc: TopologyDoc = serde_json::from_slice(data)?;
    let arcs: Vec<Vec<(f64, f64)>> = doc
        .arcs
        .iter()
        .map(|arc| decode_arc(arc, doc.transform.as_ref()))
        .collect();

    let mut countries = Vec::with_capacity(doc.objects.countries.geometries.len());
    for geometry in &doc.objects.countries.geometries {
        let (id, polygons): (&Option<serde_json::Value>, Vec<&Vec<Vec<i64>>>) = match geometry {
            Geometry::Polygon { id, arcs } => (id, vec![arcs]),
            Geometry::MultiPolygon { id, arcs } => (id, arcs.iter().collect()),
        };
        let mut rings = Vec::new();
        for polygon in polygons {
            for ring_arcs in polygon {
                rings.push(stitch_ring(ring_arcs, &arcs)?);
            }
        }
        countries.push(CountryRings {
            id: id_string(id.as_ref()),
            rings,
        });
    }
    Ok(countries)
}

fn decode_arc(arc: &[[f64; 2]], transform: Option<&Transform>) -> Vec<(f64, f64)> {
    match transform {
        Some(t) => {
            let mut x = 0.0;
            let mut y = 0.0;
            arc.iter()
                .map(|delta| {
                    x += delta[0];
                    y += delta[1];
                    (x * t.scale[0] + t.translate[0], y * t.scale[1] + t.translate[1])
                })
                .collect()
        }
        // Non-quantized documents carry absolute positions.
        None => arc.iter().map(|p| (p[0], p[1])).collect(),
    }
}

fn stitch_ring(
    ring_arcs: &[i64],
    arcs: &[Vec<(f64, f64)>],
) -> Result<Vec<(f64, f64)>, TopologyError> {
    let mut ring = Vec::new();
    for (i, &index) in ring_arcs.iter().enumerate() {
        let arc_index = if index < 0 { !index } else { index };
        let arc = arcs
            .get(usize::try_from(arc_index).unwrap_or(usize::MAX))
            .ok_or(TopologyError::ArcOutOfRange(index, arcs.len()))?;

        let points: Vec<(f64, f64)> = if index < 0 {
            arc.iter().rev().copied().collect()
        } else {
            arc.clone()
        };
        // Consecutive arcs share their junction point.
        let skip = usize::from(i > 0);
        ring.extend(points.into_iter().skip(skip));
    }
    Ok(ring)
}

/// Topology ids may be strings or numbers; both become strings so country
/// elements can match ISO codes.
fn id_string(id: Option<&serde_json::Value>) -> String {
    match id {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Number(n)) => match n.as_i64() {
            Some(i) => i.to_string(),
            None => n.to_string(),
        },
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // A 2x2 quantized square split into two arcs that share endpoints.
    const SQUARE: &str = r#"{
        "type": "Topology",
        "transform": { "scale": [1.0, 1.0], "translate": [10.0, 20.0] },
        "arcs": [
            [[0, 0], [2, 0], [0, 2]],
            [[2, 2], [-2, 0], [0, -2]]
        ],
        "objects": {
            "countries": {
                "type": "GeometryCollection",
                "geometries": [
                    { "type": "Polygon", "id": "SQR", "arcs": [[0, 1]] }
                ]
            }
        }
    }"#;

    #[test]
    fn decodes_transformed_delta_arcs() {
        let countries = match parse_topology(SQUARE.as_bytes()) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].id, "SQR");
        // Junction (12, 22) appears once where the arcs meet.
        assert_eq!(
            countries[0].rings[0],
            vec![
                (10.0, 20.0),
                (12.0, 20.0),
                (12.0, 22.0),
                (10.0, 22.0),
                (10.0, 20.0)
            ]
        );
    }

    #[test]
    fn negative_indices_stitch_reversed_without_duplicate_junctions() {
        // The same ring traversed the other way round: [-2, -1] is the
        // complement of [0, 1] in reverse order.
        let doc = SQUARE.replace("[[0, 1]]", "[[-2, -1]]");
        let countries = match parse_topology(doc.as_bytes()) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        };
        let ring = &countries[0].rings[0];
        assert_eq!(
            ring,
            &vec![
                (10.0, 20.0),
                (10.0, 22.0),
                (12.0, 22.0),
                (12.0, 20.0),
                (10.0, 20.0)
            ]
        );
    }

    #[test]
    fn numeric_ids_become_strings() {
        let doc = SQUARE.replace("\"SQR\"", "276");
        let countries = match parse_topology(doc.as_bytes()) {
            Ok(c) => c,
            Err(e) => panic!("{e}"),
        };
        assert_eq!(countries[0].id, "276");
    }

    #[test]
    fn out_of_range_arc_is_an_error() {
        let doc = SQUARE.replace("[[0, 1]]", "[[0, 7]]");
        assert!(matches!(
            parse_topology(doc.as_bytes()),
            Err(TopologyError::ArcOutOfRange(7, 2))
        ));
    }
}
