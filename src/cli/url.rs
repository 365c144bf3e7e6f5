//! `url` command: expand article URL templates.

use crate::cli::UrlArgs;
use crate::config::{ArticleRef, SiteConfig};
use crate::utils::date::DateTimeUtc;
use anyhow::{Context, Result};

pub fn run(config: &SiteConfig, args: &UrlArgs) -> Result<()> {
    let article = article_from_args(args)?;
    println!("url:     {}", config.article_url(&article)?);
    println!("link:    {}", config.article_permalink(&article)?);
    println!("save_as: {}", config.article_save_as(&article)?.display());
    Ok(())
}

fn article_from_args(args: &UrlArgs) -> Result<ArticleRef> {
    let date = DateTimeUtc::parse(&args.date)
        .with_context(|| format!("invalid date '{}', expected YYYY-MM-DD", args.date))?;

    let mut article = ArticleRef::new(&args.slug, date);
    article.category = args.category.clone();
    article.author = args.author.clone();
    article.lang = args.lang.clone();
    Ok(article)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(date: &str) -> UrlArgs {
        UrlArgs {
            slug: "numba-vs-cython".into(),
            date: date.into(),
            category: None,
            author: None,
            lang: Some("fr".into()),
        }
    }

    #[test]
    fn test_article_from_args() {
        let article = article_from_args(&args("2012-08-24")).unwrap();
        assert_eq!(article.date, DateTimeUtc::from_ymd(2012, 8, 24));
        assert_eq!(article.lang.as_deref(), Some("fr"));

        let config = SiteConfig::default();
        assert_eq!(
            config.article_url(&article).unwrap(),
            "blog/2012/08/24/numba-vs-cython/"
        );
    }

    #[test]
    fn test_invalid_date() {
        let err = article_from_args(&args("24/08/2012")).unwrap_err();
        assert!(err.to_string().contains("24/08/2012"));
    }
}
