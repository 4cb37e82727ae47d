use crate::{Answer, ClosedRing, Coordinates, Region};
use anyhow::{Context, Result, anyhow, bail, ensure};
use serde_json::{Map, Value};

/// Parses a GeoJSON `Polygon` geometry, or a `Feature` carrying one, into a [`Region`].
///
/// The rings are taken verbatim; validation is left to
/// [`Region::verify`](crate::Region::verify).
pub fn parse_region(json: &str) -> Result<Region> {
	let value: Value = serde_json::from_str(json).context("parsing GeoJSON")?;
	let object = as_object(&value, "GeoJSON")?;
	match get_type(object)? {
		"Polygon" => parse_polygon(object),
		"Feature" => parse_feature_geometry(object),
		other => bail!("expected a Polygon or a Feature, but got '{other}'"),
	}
}

/// Parses a GeoJSON `Polygon`, `Feature` or `FeatureCollection` into answers, in
/// document order.
///
/// A feature's label is its `name` property, or its `text` property, or else
/// `"answer N"` with N counting from 1.
pub fn parse_answers(json: &str) -> Result<Vec<Answer>> {
	let value: Value = serde_json::from_str(json).context("parsing GeoJSON")?;
	let object = as_object(&value, "GeoJSON")?;
	match get_type(object)? {
		"Polygon" => Ok(vec![Answer::new(default_label(0), parse_polygon(object)?)]),
		"Feature" => Ok(vec![parse_feature(object, 0)?]),
		"FeatureCollection" => {
			let features = object
				.get("features")
				.ok_or_else(|| anyhow!("FeatureCollection must have features"))?
				.as_array()
				.ok_or_else(|| anyhow!("features must be an array"))?;
			features
				.iter()
				.enumerate()
				.map(|(index, feature)| {
					as_object(feature, "feature")
						.and_then(|object| {
							check_type(object, "Feature")?;
							parse_feature(object, index)
						})
						.with_context(|| format!("feature {index}"))
				})
				.collect()
		}
		other => bail!("expected a Polygon, a Feature or a FeatureCollection, but got '{other}'"),
	}
}

fn parse_feature(object: &Map<String, Value>, index: usize) -> Result<Answer> {
	let region = parse_feature_geometry(object)?;
	let label = object
		.get("properties")
		.and_then(Value::as_object)
		.and_then(|properties| {
			["name", "text"]
				.iter()
				.find_map(|key| properties.get(*key).and_then(Value::as_str))
		})
		.map_or_else(|| default_label(index), str::to_string);
	Ok(Answer::new(label, region))
}

fn parse_feature_geometry(object: &Map<String, Value>) -> Result<Region> {
	let geometry = object
		.get("geometry")
		.ok_or_else(|| anyhow!("Feature must have a geometry"))?;
	let geometry = as_object(geometry, "geometry")?;
	match get_type(geometry)? {
		"Polygon" => parse_polygon(geometry),
		other => bail!("geometry type '{other}' is not supported, expected a Polygon"),
	}
}

fn parse_polygon(object: &Map<String, Value>) -> Result<Region> {
	let coordinates = object
		.get("coordinates")
		.ok_or_else(|| anyhow!("Polygon must have coordinates"))?
		.as_array()
		.ok_or_else(|| anyhow!("Polygon coordinates must be an array of rings"))?;

	let rings = coordinates
		.iter()
		.enumerate()
		.map(|(index, ring)| parse_ring(ring).with_context(|| format!("ring {index}")))
		.collect::<Result<Vec<_>>>()?;
	Ok(Region::new(rings))
}

fn parse_ring(value: &Value) -> Result<ClosedRing> {
	let points = value.as_array().ok_or_else(|| anyhow!("ring must be an array of points"))?;
	points
		.iter()
		.map(parse_point)
		.collect::<Result<Vec<_>>>()
		.map(ClosedRing)
}

fn parse_point(value: &Value) -> Result<Coordinates> {
	let values = value.as_array().ok_or_else(|| anyhow!("point must be an array"))?;
	ensure!(
		values.len() == 2,
		"points in coordinates must have exactly two values, but got {}",
		values.len()
	);
	let number = |v: &Value| v.as_f64().ok_or_else(|| anyhow!("coordinate '{v}' is not a number"));
	Ok(Coordinates::new(number(&values[0])?, number(&values[1])?))
}

fn as_object<'a>(value: &'a Value, name: &str) -> Result<&'a Map<String, Value>> {
	value.as_object().ok_or_else(|| anyhow!("{name} must be an object"))
}

fn get_type(object: &Map<String, Value>) -> Result<&str> {
	object
		.get("type")
		.ok_or_else(|| anyhow!("GeoJSON object must have a type"))?
		.as_str()
		.ok_or_else(|| anyhow!("type must be a string"))
}

fn check_type(object: &Map<String, Value>, name: &str) -> Result<()> {
	let object_type = get_type(object)?;
	ensure!(object_type == name, "type must be '{name}', but is '{object_type}'");
	Ok(())
}

fn default_label(index: usize) -> String {
	format!("answer {}", index + 1)
}
