//! Walks through the WordPress.com Authorization Code flow with the default reqwest transport.
//!
//! 1. Export `WORDPRESS_COM_CLIENT_ID`, `WORDPRESS_COM_CLIENT_SECRET`, and
//!    `WORDPRESS_COM_REDIRECT_URI` (optionally `WORDPRESS_COM_BLOG`).
//! 2. Run the demo once to print the authorization URL and open it in a browser.
//! 3. Run it again with `WORDPRESS_COM_CODE` set to the `code` query parameter from the redirect to
//!    exchange it and print the `/me` profile.

// std
use std::env;
// crates.io
use color_eyre::Result;
// self
use oauth2_wordpress_com::{
	client::{AuthorizationOptions, ReqwestProviderClient},
	provider::{ProviderConfiguration, WordPressCom, WordPressComScope},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let mut config = ProviderConfiguration::new(
		env::var("WORDPRESS_COM_CLIENT_ID")?,
		env::var("WORDPRESS_COM_CLIENT_SECRET")?,
		env::var("WORDPRESS_COM_REDIRECT_URI")?,
	);

	if let Ok(blog) = env::var("WORDPRESS_COM_BLOG") {
		config = config.with_blog(blog);
	}

	let client = <ReqwestProviderClient<WordPressCom>>::new(WordPressCom::new(config))?;
	let Ok(code) = env::var("WORDPRESS_COM_CODE") else {
		let request = client.authorization_url(
			AuthorizationOptions::default().with_scopes([WordPressComScope::Auth]),
		)?;

		println!("Open this URL to authorize the application:\n{}", request.url);
		println!("Expected state: {}", request.state);

		return Ok(());
	};
	let token = client.exchange_code(&code).await?;

	println!("Token type: {}", token.token_type);
	println!("Blog ID: {:?}", token.value("blog_id"));
	println!("Blog URL: {:?}", token.value("blog_url"));

	let user = client.resource_owner(&token).await?;

	println!("User ID: {:?}", user.id());
	println!("Username: {:?}", user.username());
	println!("Display name: {:?}", user.display_name());
	println!("Primary blog: {:?}", user.blog_url());

	Ok(())
}
