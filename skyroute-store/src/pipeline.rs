//! Query documents sent to MongoDB. Kept free of I/O so the shapes can be
//! checked without a server.

use bson::{doc, Document};
use skyroute_core::itinerary::{AIRLINE, AIRLINE_FIELDS, AIRPORT_FIELDS, FLYING_FROM, FLYING_TO};
use skyroute_core::routes::RouteRequest;

const ORIGIN_AIRPORT: &str = "airportFrom";
const DESTINATION_AIRPORT: &str = "airportTo";
const OPERATING_AIRLINE: &str = "airline";

/// `$search` over airports: wildcard on the code, autocomplete on name and
/// city. Any clause matching is enough.
pub fn airport_search(index: &str, prefix: &str) -> Vec<Document> {
    vec![doc! {
        "$search": {
            "index": index,
            "compound": {
                "should": [
                    {
                        "wildcard": {
                            "path": "code",
                            "query": prefix,
                            "allowAnalyzedField": true,
                        }
                    },
                    { "autocomplete": { "path": "name", "query": prefix } },
                    { "autocomplete": { "path": "city", "query": prefix } },
                ]
            }
        }
    }]
}

/// Equality filter for one route lookup. The day must already be validated.
pub fn route_filter(request: &RouteRequest) -> Document {
    let mut filter = doc! {
        "airportFromIATA": request.fromiata.as_str(),
        "airportToIATA": request.toiata.as_str(),
    };
    filter.insert(request.day_field(), "yes");
    filter
}

/// Joins a route with its origin and destination airports and its airline.
///
/// Every join is a left join: unmatched relations unwind to nothing rather
/// than dropping the route.
pub fn itinerary(route_id: i64, airports: &str, airlines: &str) -> Vec<Document> {
    let mut projection = Document::new();
    projection.insert(FLYING_FROM, project_group(ORIGIN_AIRPORT, &AIRPORT_FIELDS));
    projection.insert(FLYING_TO, project_group(DESTINATION_AIRPORT, &AIRPORT_FIELDS));
    projection.insert(AIRLINE, project_group(OPERATING_AIRLINE, &AIRLINE_FIELDS));

    vec![
        doc! { "$match": { "id": route_id } },
        lookup(airports, "airportFromIATA", "code", ORIGIN_AIRPORT),
        lookup(airports, "airportToIATA", "code", DESTINATION_AIRPORT),
        lookup(airlines, "airlineIATA", "IATA", OPERATING_AIRLINE),
        unwind(OPERATING_AIRLINE),
        unwind(DESTINATION_AIRPORT),
        unwind(ORIGIN_AIRPORT),
        doc! { "$project": projection },
    ]
}

fn lookup(from: &str, local_field: &str, foreign_field: &str, as_field: &str) -> Document {
    doc! {
        "$lookup": {
            "from": from,
            "localField": local_field,
            "foreignField": foreign_field,
            "as": as_field,
        }
    }
}

fn unwind(field: &str) -> Document {
    doc! {
        "$unwind": {
            "path": format!("${}", field),
            "preserveNullAndEmptyArrays": true,
        }
    }
}

fn project_group(source: &str, fields: &[&str]) -> Document {
    let mut group = Document::new();
    for field in fields {
        group.insert(*field, format!("${}.{}", source, field));
    }
    group
}
