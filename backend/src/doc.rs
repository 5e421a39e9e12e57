//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: the voter search and detail endpoints, the health
//! probes, and the shared error envelope. Debug builds serve the generated
//! document at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::domain::{AreaCode, Error, ErrorCode, Gender, VoterRecord};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Voter search API",
        description = "Read-only HTTP interface over the electoral roll: \
                       area-scoped search plus per-voter detail."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::voters::search_voters,
        crate::inbound::http::voters::voter_detail,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(VoterRecord, Gender, AreaCode, Error, ErrorCode)),
    tags(
        (name = "voters", description = "Electoral roll search and detail"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
