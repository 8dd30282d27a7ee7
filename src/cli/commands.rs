use crate::cli::args::{Args, AuxCommand, ConfigCommand, MultipleArgs, QueryArgs};
use crate::cli::output::ConsoleWriter;
use crate::core::catalog::{agent, find_command, CollectionCommand};
use crate::core::collection::{Collection, PageRequest};
use crate::core::source::{self, File, Sourcer};
use crate::domain::config::IntrospectConfig;
use crate::domain::error::{IntrospectError, IntrospectResult};
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::hosts::HostMap;
use crate::infrastructure::http::build_client;
use crate::infrastructure::logging::init_logging;
use clap::{ArgMatches, FromArgMatches};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Settings shared by the commands of one invocation
pub struct Runtime {
    pub config: IntrospectConfig,
    pub hosts: HostMap,
}

impl Runtime {
    pub fn new(config: IntrospectConfig, hosts: HostMap) -> Self {
        Self { config, hosts }
    }

    fn client(&self) -> IntrospectResult<reqwest::Client> {
        build_client(Duration::from_millis(self.config.global.timeout_ms), &self.hosts)
    }
}

/// Execute the parsed command line
pub async fn execute_command(matches: ArgMatches) -> IntrospectResult<()> {
    let args = Args::from_arg_matches(&matches)
        .map_err(|e| IntrospectError::InvalidInput(e.to_string()))?;
    let mut writer = ConsoleWriter::stdout();

    let config_manager = ConfigManager::new()?;
    let config = if let Some(config_path) = &args.config {
        config_manager.load_config_from_path(config_path.as_ref())?
    } else {
        config_manager.load_config()?
    };

    if !args.quiet {
        init_logging(&config.global.log_level, args.verbose)?;
    }

    let hosts = match args.hosts.as_ref().or(config.global.hosts_file.as_ref()) {
        Some(path) => HostMap::load(Path::new(path))?,
        None => HostMap::new(),
    };
    let runtime = Runtime::new(config, hosts);

    let Some((name, sub_matches)) = matches.subcommand() else {
        return Err(IntrospectError::InvalidInput("No command given".to_string()));
    };

    if let Some(command) = find_command(name) {
        let query = QueryArgs::from_arg_matches(sub_matches)
            .map_err(|e| IntrospectError::InvalidInput(e.to_string()))?;
        return run_collection(&mut writer, &command, &query, &runtime).await;
    }

    let aux = AuxCommand::from_arg_matches(&matches)
        .map_err(|e| IntrospectError::InvalidInput(e.to_string()))?;
    match aux {
        AuxCommand::AgentMultiple(multiple) => run_multiple(&mut writer, &multiple, &runtime).await,
        AuxCommand::Config(config_args) => {
            execute_config_command(config_args.command, &mut writer, &runtime.config, &config_manager)
        }
        AuxCommand::Hosts => writer.write_hosts(&runtime.hosts),
        AuxCommand::Version => {
            writer.write_message(&format!("introspect-cli {}", env!("CARGO_PKG_VERSION")))
        }
    }
}

/// Source of a page: the file named by the first argument with
/// `--from-file`, the descriptor's source otherwise
fn page_source<F>(
    command: &str,
    page_args: &[&str],
    args: &[String],
    from_file: bool,
    runtime: &Runtime,
    build: F,
) -> IntrospectResult<Box<dyn Sourcer>>
where
    F: FnOnce(&PageRequest<'_>) -> Box<dyn Sourcer>,
{
    if from_file {
        let path = args.first().ok_or_else(|| IntrospectError::MissingArguments {
            command: command.to_string(),
            expected: vec!["file".to_string()],
        })?;
        return Ok(Box::new(File::new(path)));
    }

    if args.len() < page_args.len() {
        return Err(IntrospectError::MissingArguments {
            command: command.to_string(),
            expected: page_args.iter().map(|a| a.to_string()).collect(),
        });
    }

    Ok(build(&PageRequest::new(args, runtime.config.ports)))
}

/// Load, search and render one collection
pub async fn run_collection<W: Write>(
    writer: &mut ConsoleWriter<W>,
    command: &CollectionCommand,
    query: &QueryArgs,
    runtime: &Runtime,
) -> IntrospectResult<()> {
    let desc = (command.desc)();
    let source = page_source(
        command.name,
        &desc.page_args,
        &query.args,
        query.from_file,
        runtime,
        |request| desc.source(request),
    )?;

    if query.url {
        return writer.write_message(&source.location());
    }

    let page = source::load(source.as_ref(), &runtime.client()?).await?;
    let collection = Collection::load(&page, &desc)?;
    let total = collection.len();

    let fuzzy = query.search.as_deref().filter(|p| !p.is_empty());
    let strict = query.strict_search.as_deref().filter(|p| !p.is_empty());
    let elements = if let Some(pattern) = fuzzy {
        collection.search_fuzzy(pattern)?
    } else if let Some(pattern) = strict {
        collection.search_strict(pattern)?
    } else {
        collection.into_elements()
    };

    debug!(command = command.name, total, shown = elements.len(), "rendering collection");
    writer.write_elements(&elements, query.format())
}

/// List (or count) the routes having multiple nexthops
pub async fn run_multiple<W: Write>(
    writer: &mut ConsoleWriter<W>,
    multiple: &MultipleArgs,
    runtime: &Runtime,
) -> IntrospectResult<()> {
    let source = page_source(
        "agent-multiple",
        &["vrouter-fqdn", "vrf-name"],
        &multiple.args,
        multiple.from_file,
        runtime,
        agent::multiple_source,
    )?;

    if multiple.url {
        return writer.write_message(&source.location());
    }

    let page = source::load(source.as_ref(), &runtime.client()?).await?;
    let routes = agent::multiple_nexthop_routes(&page)?;

    if multiple.count {
        writer.write_message(&routes.len().to_string())
    } else {
        writer.write_lines(&routes)
    }
}

fn execute_config_command<W: Write>(
    command: ConfigCommand,
    writer: &mut ConsoleWriter<W>,
    config: &IntrospectConfig,
    config_manager: &ConfigManager,
) -> IntrospectResult<()> {
    match command {
        ConfigCommand::Show => writer.write_config(config),
        ConfigCommand::Validate { file } => {
            let result = match &file {
                Some(config_path) => config_manager.load_config_from_path(config_path.as_ref()),
                None => config_manager.load_config(),
            };
            match (result, file) {
                (Ok(_), Some(path)) => writer.write_message(&format!("Configuration file '{}' is valid", path)),
                (Ok(_), None) => writer.write_message("Current configuration is valid"),
                (Err(e), _) => Err(e),
            }
        }
        ConfigCommand::Init { output, global } => {
            if global {
                let global_path = config_manager.get_global_config_path_ref();
                config_manager.save_config_to_path(global_path, &IntrospectConfig::default())?;
                writer.write_message(&format!(
                    "Global configuration initialized at '{}'",
                    global_path.display()
                ))
            } else {
                let dir = match output {
                    Some(dir) => dir.into(),
                    None => std::env::current_dir()?,
                };
                let path = config_manager.init_project_config(&dir)?;
                writer.write_message(&format!(
                    "Project configuration initialized at '{}'",
                    path.display()
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runtime() -> Runtime {
        Runtime::new(IntrospectConfig::default(), HostMap::new())
    }

    #[test]
    fn test_page_source_missing_arguments() {
        let result = page_source(
            "agent-route",
            &["vrouter-fqdn", "vrf-name"],
            &["compute1".to_string()],
            false,
            &runtime(),
            agent::multiple_source,
        );

        match result {
            Err(IntrospectError::MissingArguments { command, expected }) => {
                assert_eq!(command, "agent-route");
                assert_eq!(expected, vec!["vrouter-fqdn", "vrf-name"]);
            }
            _ => panic!("expected missing arguments"),
        }
    }

    #[test]
    fn test_page_source_from_file() {
        let source = page_source(
            "agent-route",
            &["vrouter-fqdn", "vrf-name"],
            &["/tmp/route.xml".to_string()],
            true,
            &runtime(),
            agent::multiple_source,
        )
        .unwrap();
        assert_eq!(source.location(), "/tmp/route.xml");
    }

    #[test]
    fn test_page_source_uses_configured_port() {
        let mut config = IntrospectConfig::default();
        config.ports.agent = 18085;
        let runtime = Runtime::new(config, HostMap::new());

        let source = page_source(
            "agent-multiple",
            &["vrouter-fqdn", "vrf-name"],
            &["compute1".to_string(), "default-domain:admin:net:net".to_string()],
            false,
            &runtime,
            agent::multiple_source,
        )
        .unwrap();
        assert_eq!(
            source.location(),
            "http://compute1:18085/Snh_PageReq?x=begin:-1,end:-1,table:default-domain:admin:net:net.uc.route.0,"
        );
    }

    #[tokio::test]
    async fn test_run_collection_url_only() {
        let command = find_command("controller-route").unwrap();
        let query = QueryArgs {
            url: true,
            args: vec!["ctrl1".to_string(), "default-domain:admin:net:net".to_string()],
            ..QueryArgs::default()
        };

        let mut writer = ConsoleWriter::new(Vec::new());
        run_collection(&mut writer, &command, &query, &runtime()).await.unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            output,
            "http://ctrl1:8083/Snh_ShowRouteReq?x=default-domain:admin:net:net.inet.0\n"
        );
    }

    #[tokio::test]
    async fn test_empty_search_pattern_keeps_every_element() {
        let mut page = tempfile::NamedTempFile::new().unwrap();
        write!(
            page,
            "<__VrfListResp_list><VrfListResp><vrf_list><list>\
             <VrfSandeshData><name>a</name></VrfSandeshData>\
             <VrfSandeshData><uc_index>1</uc_index></VrfSandeshData>\
             </list></vrf_list></VrfListResp></__VrfListResp_list>"
        )
        .unwrap();

        let command = find_command("agent-vrf").unwrap();
        for (search, strict_search) in [(Some(String::new()), None), (None, Some(String::new()))] {
            let query = QueryArgs {
                from_file: true,
                search,
                strict_search,
                args: vec![page.path().display().to_string()],
                ..QueryArgs::default()
            };

            let mut writer = ConsoleWriter::new(Vec::new());
            run_collection(&mut writer, &command, &query, &runtime()).await.unwrap();
            assert_eq!(String::from_utf8(writer.into_inner()).unwrap(), "a\n\n");
        }
    }
}
