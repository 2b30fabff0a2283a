use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use blog_service::handlers;
use blog_service::services::RankingService;
use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client, Database};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn service_banner() -> HttpResponse {
    HttpResponse::Ok().body("blog-service running")
}

async fn health_summary(db: web::Data<Database>) -> HttpResponse {
    match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "blog-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => {
            tracing::warn!("Health check: MongoDB ping failed - {}", e);
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "error": "store unreachable",
                "service": "blog-service"
            }))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,mongodb=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match blog_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:#}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Initialize the MongoDB client: one handle for the process lifetime,
    // pooled internally by the driver.
    let mut client_options = ClientOptions::parse(&config.database.url)
        .await
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("Failed to parse MongoDB connection string: {e}"),
            )
        })?;
    client_options.max_pool_size = Some(config.database.max_pool_size);
    client_options.app_name = Some("blog-service".to_string());

    let client = Client::with_options(client_options).map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to create MongoDB client: {e}"),
        )
    })?;
    let db = client.database(&config.database.name);

    match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => {
            tracing::info!("MongoDB connection validated (database: {})", config.database.name);
        }
        Err(e) => {
            tracing::error!("FATAL: MongoDB ping failed - {}", e);
            tracing::error!(
                "   Fix: Ensure MongoDB is running and accessible at {}",
                config.database.url
            );
            return Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                format!("MongoDB initialization failed: {}", e),
            ));
        }
    }

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let ranking_data = web::Data::new(RankingService::new(db.clone()));
    let db_data = web::Data::new(db);

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(db_data.clone())
            .app_data(ranking_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/", web::get().to(service_banner))
            .route("/health", web::get().to(health_summary))
            // Posts
            .route("/totalBlogs", web::get().to(handlers::total_posts))
            .route("/all-blogs", web::get().to(handlers::list_posts))
            .route("/blog-details/{id}", web::get().to(handlers::get_post))
            .route("/top-blogs", web::get().to(handlers::top_posts))
            .route("/add-blog", web::post().to(handlers::create_post))
            .route("/update-blog/{id}", web::put().to(handlers::update_post))
            // Comments
            .route("/all-comments/blogId", web::get().to(handlers::list_comments))
            .route("/all-comments", web::post().to(handlers::create_comment))
            // Wishlist
            .route("/my-wishlist/email", web::get().to(handlers::list_wishlist))
            .route("/all-wishlist/{userEmail}", web::get().to(handlers::count_wishlist))
            .route("/all-wishlist", web::post().to(handlers::create_wishlist_entry))
            .route("/my-wishlist/{id}", web::delete().to(handlers::delete_wishlist_entry))
    })
    .bind(&bind_address)?
    .run()
    .await?;

    tracing::info!("blog-service shutting down");

    Ok(())
}
