//! `build`: assemble a long durable link

use std::path::Path;

use url::Url;

use crate::cli::CliError;
use crate::cli::parser::BuildArgs;
use crate::config::Settings;
use crate::model::{
    AnalyticsParameters, AndroidParameters, IosParameters, ItunesConnectAnalyticsParameters,
    LinkComponents, OptionsParameters, OtherPlatformParameters, SocialMetaTagParameters,
};

pub fn build_link(args: BuildArgs, settings: &Settings) -> Result<Url, CliError> {
    let components = match &args.from_file {
        Some(path) => load_components(path)?,
        None => components_from_args(args, settings)?,
    };
    Ok(components.build()?)
}

/// Read components from a `.toml` file, or JSON for anything else.
pub fn load_components(path: &Path) -> Result<LinkComponents, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::FileError(format!("{}: {}", path.display(), e)))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        toml::from_str(&content).map_err(|e| CliError::ParseError(e.to_string()))
    } else {
        serde_json::from_str(&content).map_err(|e| CliError::ParseError(e.to_string()))
    }
}

pub fn components_from_args(
    args: BuildArgs,
    settings: &Settings,
) -> Result<LinkComponents, CliError> {
    let link = args
        .link
        .as_deref()
        .ok_or_else(|| CliError::ParseError("A link is required".to_string()))?;
    let link = Url::parse(link).map_err(|e| CliError::ParseError(format!("link: {}", e)))?;

    let domain_prefix = args
        .domain_prefix
        .or_else(|| settings.domain_prefix.clone())
        .ok_or_else(|| {
            CliError::ParseError(
                "No domain prefix: pass --domain-prefix or set domain_prefix in settings"
                    .to_string(),
            )
        })?;

    let mut components = LinkComponents::new(link, domain_prefix)?;

    let analytics = AnalyticsParameters {
        source: args.utm_source,
        medium: args.utm_medium,
        campaign: args.utm_campaign,
        term: args.utm_term,
        content: args.utm_content,
    };
    if analytics != AnalyticsParameters::default() {
        components = components.with_analytics(analytics);
    }

    let social = SocialMetaTagParameters {
        title: args.title,
        description_text: args.description,
        image_url: args.image_url,
    };
    if social != SocialMetaTagParameters::default() {
        components = components.with_social(social);
    }

    let ios = IosParameters {
        app_store_id: args.ios_app_store_id,
        fallback_url: args.ios_fallback_url,
        ipad_fallback_url: args.ipad_fallback_url,
        minimum_app_version: args.ios_minimum_version,
    };
    if ios != IosParameters::default() {
        components = components.with_ios(ios);
    }

    if let Some(package) = args.android_package {
        let mut android = AndroidParameters::new(package)
            .minimum_version(args.android_minimum_version.unwrap_or_default());
        android.fallback_url = args.android_fallback_url;
        components = components.with_android(android);
    }

    let itunes = ItunesConnectAnalyticsParameters {
        affiliate_token: args.affiliate_token,
        campaign_token: args.campaign_token,
        provider_token: args.provider_token,
    };
    if itunes != ItunesConnectAnalyticsParameters::default() {
        components = components.with_itunes(itunes);
    }

    if let Some(url) = args.other_fallback_url {
        components = components.with_other_platform(OtherPlatformParameters::new(url));
    }

    if let Some(path_length) = args.path_length {
        components = components.with_options(OptionsParameters::new(path_length));
    }

    Ok(components)
}
