use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "Employee CRUD and name search backed by an Elasticsearch-compatible engine. Every route accepts any HTTP method.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    paths(
        crate::handlers::health::health,
        crate::handlers::search::search_employees,
        crate::handlers::employees::insert_employee,
        crate::handlers::employees::update_employee,
        crate::handlers::employees::delete_employee,
    ),
    components(schemas(roster::Employee, crate::dto::HealthResponse)),
    tags(
        (name = "employees", description = "Employee records"),
        (name = "health", description = "Engine reachability")
    )
)]
pub struct ApiDoc;
