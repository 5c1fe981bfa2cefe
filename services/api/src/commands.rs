use crate::infra::load_store;
use clap::Args;
use estate_hub::catalog::{SortDirection, SortKey, SortOrder};
use estate_hub::directory::{Provider, ProviderQuery};
use estate_hub::error::AppError;
use estate_hub::faq::{FaqCategoryView, FaqMatch, Role, Viewer};
use estate_hub::leads::{Lead, LeadQuery, PipelineStageSummary};
use std::fmt;

#[derive(Args, Debug, Default)]
pub(crate) struct ProviderArgs {
    /// Category key such as lawyer, painter, or all
    #[arg(long, short)]
    pub(crate) category: Option<String>,
    /// Case-insensitive text matched against name and location
    #[arg(long, short)]
    pub(crate) query: Option<String>,
    /// rating, price-low, price-high, experience, or name
    #[arg(long)]
    pub(crate) sort: Option<SortKey>,
    /// asc or desc; defaults to the sort key's natural direction
    #[arg(long)]
    pub(crate) direction: Option<SortDirection>,
    /// Only verified providers
    #[arg(long)]
    pub(crate) verified: bool,
    /// Only providers currently accepting work
    #[arg(long)]
    pub(crate) available: bool,
    /// Spoken language, matched case-insensitively
    #[arg(long)]
    pub(crate) language: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct FaqSearchArgs {
    /// Search phrase
    pub(crate) query: String,
    /// buyer, seller, or admin
    #[arg(long, default_value = "buyer")]
    pub(crate) role: Role,
    /// Preview another role's view (admins only)
    #[arg(long)]
    pub(crate) acting_as: Option<Role>,
}

#[derive(Args, Debug)]
pub(crate) struct FaqBrowseArgs {
    /// buyer, seller, or admin
    #[arg(long, default_value = "buyer")]
    pub(crate) role: Role,
    /// Preview another role's view (admins only)
    #[arg(long)]
    pub(crate) acting_as: Option<Role>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct LeadArgs {
    /// Pipeline status such as negotiation, site-visit, or all
    #[arg(long, short)]
    pub(crate) status: Option<String>,
    /// Case-insensitive text matched against lead name and property
    #[arg(long, short)]
    pub(crate) query: Option<String>,
    /// last-updated, name, submission-date, or commission
    #[arg(long)]
    pub(crate) sort: Option<SortKey>,
    /// asc or desc; defaults to the sort key's natural direction
    #[arg(long)]
    pub(crate) direction: Option<SortDirection>,
    /// Print per-status counts and commission totals after the listing
    #[arg(long)]
    pub(crate) summary: bool,
}

pub(crate) fn run_providers(args: ProviderArgs) -> Result<(), AppError> {
    let store = load_store()?;
    let query = provider_query(args)?;
    let providers = store.providers().search(&query);
    print!(
        "{}",
        ProviderReport {
            query: &query,
            providers: &providers,
        }
    );
    Ok(())
}

pub(crate) fn run_faq_search(args: FaqSearchArgs) -> Result<(), AppError> {
    let store = load_store()?;
    let viewer = viewer(args.role, args.acting_as);
    let matches = store.faq().search(&args.query, viewer);
    print!(
        "{}",
        FaqSearchReport {
            query: &args.query,
            viewer,
            matches: &matches,
        }
    );
    Ok(())
}

pub(crate) fn run_faq_browse(args: FaqBrowseArgs) -> Result<(), AppError> {
    let store = load_store()?;
    let viewer = viewer(args.role, args.acting_as);
    let categories = store.faq().categories_for(viewer);
    print!(
        "{}",
        FaqBrowseReport {
            viewer,
            categories: &categories,
        }
    );
    Ok(())
}

pub(crate) fn run_leads(args: LeadArgs) -> Result<(), AppError> {
    let store = load_store()?;
    let show_summary = args.summary;
    let query = lead_query(args)?;
    let leads = store.leads().search(&query);
    print!("{}", LeadReport(&leads));

    if show_summary {
        print!("{}", PipelineReport(&store.leads().pipeline_summary()));
    }
    Ok(())
}

fn provider_query(args: ProviderArgs) -> Result<ProviderQuery, AppError> {
    Ok(ProviderQuery {
        category: args.category,
        text: args.query,
        verified_only: args.verified,
        available_only: args.available,
        language: args.language,
        sort: SortOrder::for_listing::<Provider>(args.sort, args.direction)?,
    })
}

fn lead_query(args: LeadArgs) -> Result<LeadQuery, AppError> {
    Ok(LeadQuery {
        status: args.status,
        text: args.query,
        sort: SortOrder::for_listing::<Lead>(args.sort, args.direction)?,
    })
}

fn viewer(role: Role, acting_as: Option<Role>) -> Viewer {
    let viewer = Viewer::new(role);
    match acting_as {
        Some(preview) => viewer.acting_as(preview),
        None => viewer,
    }
}

struct ViewerLabel(Viewer);

impl fmt::Display for ViewerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let viewer = self.0;
        match viewer.acting_as {
            Some(preview) if viewer.effective_role() == preview && viewer.role != preview => {
                write!(f, "{} acting as {}", viewer.role.label(), preview.label())
            }
            _ => f.write_str(viewer.role.label()),
        }
    }
}

struct ProviderReport<'a> {
    query: &'a ProviderQuery,
    providers: &'a [&'a Provider],
}

impl fmt::Display for ProviderReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = self.query.category.as_deref().unwrap_or("all");
        write!(f, "Providers in '{category}'")?;
        if let Some(order) = self.query.sort {
            let direction = match order.direction() {
                SortDirection::Ascending => "asc",
                SortDirection::Descending => "desc",
            };
            write!(f, " sorted by {} ({direction})", order.key.key())?;
        }
        writeln!(f, ": {} match(es)", self.providers.len())?;

        for provider in self.providers {
            let rating = provider
                .rating
                .value()
                .map(|value| format!("{value:.1}"))
                .unwrap_or_else(|| "unrated".to_string());
            let mut badges = Vec::new();
            if provider.verified {
                badges.push("verified");
            }
            if !provider.available {
                badges.push("unavailable");
            }

            write!(
                f,
                "- #{} {} | {} | {} | rating {} ({} reviews) | {} | {}",
                provider.id,
                provider.name,
                provider.profession,
                provider.location,
                rating,
                provider.reviews,
                provider.price.display(),
                provider.experience.display(),
            )?;
            if !badges.is_empty() {
                write!(f, " | {}", badges.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

struct FaqSearchReport<'a> {
    query: &'a str,
    viewer: Viewer,
    matches: &'a [FaqMatch<'a>],
}

impl fmt::Display for FaqSearchReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "FAQ results for '{}' as {}: {} match(es)",
            self.query.trim(),
            ViewerLabel(self.viewer),
            self.matches.len()
        )?;
        for hit in self.matches {
            writeln!(
                f,
                "- [{}] {} > {}",
                hit.relevance, hit.category.title, hit.subcategory.title
            )?;
            writeln!(f, "    {}", hit.subcategory.resolution)?;
        }
        Ok(())
    }
}

struct FaqBrowseReport<'a> {
    viewer: Viewer,
    categories: &'a [FaqCategoryView<'a>],
}

impl fmt::Display for FaqBrowseReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FAQ for {}", ViewerLabel(self.viewer))?;
        for category in self.categories {
            writeln!(f, "{} ({})", category.title, category.id)?;
            for entry in &category.subcategories {
                writeln!(f, "  - {} ({})", entry.title, entry.id)?;
            }
        }
        Ok(())
    }
}

struct LeadReport<'a>(&'a [&'a Lead]);

impl fmt::Display for LeadReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Partner leads: {} match(es)", self.0.len())?;
        for lead in self.0 {
            writeln!(
                f,
                "- #{} {} | {} | {} | submitted {} | updated {} | {}",
                lead.id,
                lead.name,
                lead.property,
                lead.status.label(),
                lead.submitted_on,
                lead.last_updated.format("%Y-%m-%d %H:%M"),
                lead.commission.display(),
            )?;
        }
        Ok(())
    }
}

struct PipelineReport<'a>(&'a [PipelineStageSummary]);

impl fmt::Display for PipelineReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pipeline summary")?;
        for stage in self.0 {
            writeln!(
                f,
                "- {}: {} lead(s), commission {:.0}",
                stage.status_label, stage.leads, stage.commission_total
            )?;
        }
        Ok(())
    }
}
