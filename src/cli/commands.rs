use std::path::Path;

use super::output;
use super::{CliError, ConfigArgs, RecordArgs, ViewArgs};
use crate::clock::Clock;
use crate::config::{store_dir_in, Config, ConfigManager};
use crate::core::services::{FilterService, SummaryService, ViewFilter};
use crate::core::{CommitOutcome, EditSession, LedgerStore, Theme, ThemeService};
use crate::ledger::DraftField;
use crate::storage::{JsonFileStore, KeyValueBackend};

/// Everything a command needs, opened from the data directory.
pub struct Context {
    pub config: Config,
    pub config_manager: ConfigManager,
    pub kv: JsonFileStore,
    pub store: LedgerStore,
}

impl Context {
    pub fn open(home: &Path) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(home)?;
        let config = config_manager.load()?;
        let kv = JsonFileStore::new(store_dir_in(home))?;
        let store = LedgerStore::open(Box::new(KeyValueBackend::new(kv.clone())));
        Ok(Self {
            config,
            config_manager,
            kv,
            store,
        })
    }

    fn view_filter(&self, view: &ViewArgs) -> ViewFilter {
        ViewFilter::new(
            view.period.unwrap_or(self.config.default_period),
            view.category,
        )
    }
}

pub fn add(ctx: &mut Context, fields: &RecordArgs, clock: &dyn Clock) -> Result<String, CliError> {
    let mut session = EditSession::new(clock);
    apply_fields(&mut session, fields);
    let outcome = session.commit(&mut ctx.store, clock)?;
    Ok(output::render_outcome(&outcome, &ctx.store, &ctx.config))
}

pub fn edit(
    ctx: &mut Context,
    index: usize,
    fields: &RecordArgs,
    clock: &dyn Clock,
) -> Result<String, CliError> {
    let mut session = EditSession::new(clock);
    session.begin_edit(&ctx.store, index)?;
    apply_fields(&mut session, fields);
    let outcome = session.commit(&mut ctx.store, clock)?;
    if let CommitOutcome::Stale { index } = outcome {
        return Err(CliError::Input(format!("record {} changed while editing", index)));
    }
    Ok(output::render_outcome(&outcome, &ctx.store, &ctx.config))
}

pub fn remove(ctx: &mut Context, index: usize) -> Result<String, CliError> {
    let (removed, mutation) = ctx.store.remove(index)?;
    let mut out = format!("Removed: {}\n", output::render_record(&removed, &ctx.config));
    if let Some(err) = mutation.persistence {
        out.push_str(&output::persistence_warning(&err));
    }
    Ok(out)
}

pub fn list(ctx: &Context, view: &ViewArgs, clock: &dyn Clock) -> Result<String, CliError> {
    let filter = ctx.view_filter(view);
    let entries = FilterService::apply(ctx.store.list(), &filter, clock.today());
    let totals = SummaryService::totals(&entries);
    let mut out = output::render_entries(&entries, &ctx.config);
    out.push_str(&output::render_totals(&totals, &ctx.config));
    Ok(out)
}

pub fn summary(ctx: &Context, view: &ViewArgs, clock: &dyn Clock) -> Result<String, CliError> {
    let filter = ctx.view_filter(view);
    let entries = FilterService::apply(ctx.store.list(), &filter, clock.today());
    let totals = SummaryService::totals(&entries);
    Ok(format!(
        "period: {}  category: {}  records: {}\n{}",
        filter.date,
        filter.category,
        entries.len(),
        output::render_totals(&totals, &ctx.config)
    ))
}

pub fn theme(ctx: &Context, value: Option<&str>) -> Result<String, CliError> {
    let theme = match value {
        None => ThemeService::load(&ctx.kv),
        Some(raw) if raw.eq_ignore_ascii_case("toggle") => ThemeService::toggle(&ctx.kv)?,
        Some(raw) => {
            let theme: Theme = raw.parse().map_err(CliError::Input)?;
            ThemeService::save(&ctx.kv, theme)?;
            theme
        }
    };
    Ok(format!("theme: {}\n", theme))
}

pub fn config(ctx: &mut Context, update: &ConfigArgs) -> Result<String, CliError> {
    let mut changed = false;
    if let Some(currency) = &update.currency {
        ctx.config.currency_symbol = currency.clone();
        changed = true;
    }
    if let Some(period) = update.period {
        ctx.config.default_period = period;
        changed = true;
    }
    if let Some(decimals) = update.decimals {
        ctx.config.decimals = decimals;
        changed = true;
    }
    if changed {
        ctx.config_manager.save(&ctx.config)?;
    }
    Ok(format!(
        "currency: {}\nperiod: {}\ndecimals: {}\n",
        ctx.config.currency_symbol, ctx.config.default_period, ctx.config.decimals
    ))
}

fn apply_fields(session: &mut EditSession, fields: &RecordArgs) {
    let pairs = [
        (DraftField::Direction, &fields.direction),
        (DraftField::Category, &fields.category),
        (DraftField::Amount, &fields.amount),
        (DraftField::Date, &fields.date),
        (DraftField::Description, &fields.description),
    ];
    for (field, value) in pairs {
        if let Some(value) = value {
            session.set_field(field, value.as_str());
        }
    }
}
