use std::path::PathBuf;

use actix_files::{Files, NamedFile};
use actix_web::{get, web};

/// Directory holding the browser client
#[derive(Debug, Clone)]
pub struct PublicDir(pub PathBuf);

#[get("/")]
pub async fn index(dir: web::Data<PublicDir>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(dir.0.join("index.html")).await?)
}

/// Everything else under the public directory; register after the API routes
pub fn assets(dir: &PublicDir) -> Files {
    Files::new("/", &dir.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use std::fs;

    fn public_dir(name: &str) -> PublicDir {
        let dir = std::env::temp_dir().join(format!("picword-public-{}-{}", std::process::id(), name));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.html"), "<h1>picword</h1>").unwrap();
        fs::write(dir.join("game.js"), "startNewGame();").unwrap();
        PublicDir(dir)
    }

    #[actix_web::test]
    async fn test_index_and_assets() {
        let dir = public_dir("serve");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(dir.clone()))
                .service(index)
                .service(assets(&dir)),
        )
        .await;

        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(body, "<h1>picword</h1>");

        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/game.js").to_request()).await;
        assert_eq!(body, "startNewGame();");

        let resp = test::call_service(&app, test::TestRequest::get().uri("/missing.css").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        fs::remove_dir_all(&dir.0).unwrap();
    }

    #[actix_web::test]
    async fn test_shipped_page_keeps_controls_outside_game_area() {
        let dir = PublicDir(std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("share/public"));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(dir.clone()))
                .service(index)
                .service(assets(&dir)),
        )
        .await;

        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
        let page = std::str::from_utf8(&body).unwrap();

        // A failed first load hides the game area; the new game button must not go with it
        let area_end = page.find("</section>").unwrap();
        let button = page.find("id=\"newGameBtn\"").unwrap();
        assert!(page.find("id=\"gameArea\"").unwrap() < area_end);
        assert!(button > area_end);
    }
}
