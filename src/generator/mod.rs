pub mod catalog;
pub mod layout;
pub mod placeholder;
pub mod template_engine;
pub mod template_store;

use anyhow::Error;

use self::{
    catalog::Catalog,
    layout::Layout,
    template_engine::{DocumentRequest, TemplateEngine},
    template_store::{backup_name, TemplateStore},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub written: usize,
    pub backups: usize,
}

/// Renders every catalog entry with one layout and writes it to the store.
pub struct Generator<Te, St>
where
    Te: TemplateEngine,
    St: TemplateStore,
{
    template_engine: Te,
    template_store: St,
    catalog: Catalog,
    layout: Layout,
    backup: bool,
}

impl<Te, St> Generator<Te, St>
where
    Te: TemplateEngine,
    St: TemplateStore,
{
    pub fn new(template_engine: Te, template_store: St, catalog: Catalog, layout: Layout) -> Self {
        Self {
            template_engine,
            template_store,
            catalog,
            layout,
            backup: true,
        }
    }

    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    /// Stops at the first failure; documents already written stay on disk.
    #[tracing::instrument(level = "debug", skip(self), fields(layout = %self.layout))]
    pub fn run(&mut self) -> Result<RunSummary, Error> {
        let engine = &self.template_engine;
        let store = &mut self.template_store;
        let layout = self.layout;
        let mut summary = RunSummary::default();

        for entry in self.catalog.entries() {
            let identifier = entry.identifier;
            if self.backup && store.preserve_if_absent(identifier)? {
                summary.backups += 1;
                tracing::info!(message = "Backup created", backup = %backup_name(identifier));
            }

            let content = engine.assemble(&DocumentRequest::new(entry.body, layout))?;
            store.write(identifier, &content)?;
            summary.written += 1;
            tracing::info!(message = "Template written", %identifier, bytes = content.len());
        }

        tracing::info!(
            message = "All templates generated",
            written = summary.written,
            backups = summary.backups,
            %layout
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod test {
    use std::{collections::HashMap, convert::Infallible};

    use thiserror::Error;

    use super::{
        catalog::Catalog,
        layout::Layout,
        template_engine::{DocumentRequest, TemplateEngine, TeraTemplateEngine},
        template_store::{FsTemplateStore, TemplateStore},
        Generator, RunSummary,
    };

    #[derive(Default)]
    struct MockTemplateStore(HashMap<String, String>);

    impl TemplateStore for MockTemplateStore {
        type Error = Infallible;

        fn exists(&self, name: &str) -> bool {
            self.0.contains_key(name)
        }

        fn read(&self, name: &str) -> Result<String, Self::Error> {
            Ok(self.0.get(name).cloned().unwrap_or_default())
        }

        fn write(&mut self, name: &str, content: &str) -> Result<(), Self::Error> {
            self.0.insert(name.to_string(), content.to_string());
            Ok(())
        }

        fn copy(&mut self, from: &str, to: &str) -> Result<(), Self::Error> {
            let content = self.0[from].clone();
            self.0.insert(to.to_string(), content);
            Ok(())
        }

        fn list(&self) -> Result<Vec<String>, Self::Error> {
            let mut names = self.0.keys().cloned().collect::<Vec<_>>();
            names.sort();
            Ok(names)
        }
    }

    #[derive(Debug, Error)]
    #[error("permission denied")]
    struct PermissionDenied;

    /// Refuses to write one document.
    struct ReadOnlyEntryStore {
        inner: MockTemplateStore,
        read_only: &'static str,
    }

    impl TemplateStore for ReadOnlyEntryStore {
        type Error = PermissionDenied;

        fn exists(&self, name: &str) -> bool {
            self.inner.exists(name)
        }

        fn read(&self, name: &str) -> Result<String, Self::Error> {
            Ok(self.inner.0.get(name).cloned().unwrap_or_default())
        }

        fn write(&mut self, name: &str, content: &str) -> Result<(), Self::Error> {
            if name == self.read_only {
                return Err(PermissionDenied);
            }
            self.inner.0.insert(name.to_string(), content.to_string());
            Ok(())
        }

        fn copy(&mut self, _from: &str, _to: &str) -> Result<(), Self::Error> {
            unimplemented!()
        }

        fn list(&self) -> Result<Vec<String>, Self::Error> {
            unimplemented!()
        }
    }

    impl<Te: TemplateEngine, St: TemplateStore> Generator<Te, St> {
        fn template_store(&self) -> &St {
            &self.template_store
        }
    }

    fn engine() -> TeraTemplateEngine {
        TeraTemplateEngine::try_init().unwrap()
    }

    #[test]
    fn test_run_writes_every_entry() {
        let mut generator = Generator::new(
            engine(),
            MockTemplateStore::default(),
            Catalog::revised(),
            Layout::Narrative,
        );
        let summary = generator.run().unwrap();
        assert_eq!(
            summary,
            RunSummary {
                written: 5,
                backups: 0
            }
        );

        let engine = engine();
        for entry in Catalog::revised().entries() {
            let expected = engine
                .assemble(&DocumentRequest::new(entry.body, Layout::Narrative))
                .unwrap();
            assert_eq!(
                generator.template_store().read(entry.identifier).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_run_preserves_previous_content_once() {
        let mut store = MockTemplateStore::default();
        store.write("primeira-cobranca.html", "<p>old</p>").unwrap();

        let mut generator =
            Generator::new(engine(), store, Catalog::initial(), Layout::Detailed);
        assert_eq!(generator.run().unwrap().backups, 1);
        assert_eq!(generator.run().unwrap().backups, 4);
        assert_eq!(generator.run().unwrap().backups, 0);

        let store = generator.template_store();
        assert_eq!(
            store.read("primeira-cobranca.html.backup").unwrap(),
            "<p>old</p>"
        );
        assert!(store
            .read("primeira-cobranca.html")
            .unwrap()
            .contains("{{valor_formato}}"));
        assert_eq!(store.list().unwrap().len(), 10);
    }

    #[test]
    fn test_run_without_backup() {
        let mut store = MockTemplateStore::default();
        store.write("cobranca-7dias.html", "old").unwrap();

        let mut generator = Generator::new(engine(), store, Catalog::revised(), Layout::Narrative)
            .with_backup(false);
        assert_eq!(generator.run().unwrap().backups, 0);
        assert!(!generator.template_store().exists("cobranca-7dias.html.backup"));
    }

    #[test]
    fn test_write_failure_aborts_remaining_batch() {
        let store = ReadOnlyEntryStore {
            inner: MockTemplateStore::default(),
            read_only: "cobranca-15dias.html",
        };
        let mut generator = Generator::new(engine(), store, Catalog::initial(), Layout::Detailed)
            .with_backup(false);

        let err = generator.run().unwrap_err();
        assert!(err.downcast_ref::<PermissionDenied>().is_some());
        assert_eq!(err.to_string(), "permission denied");

        let written = generator.template_store().inner.list().unwrap();
        assert_eq!(written, vec!["cobranca-7dias.html", "primeira-cobranca.html"]);
    }

    #[test]
    fn test_run_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("primeira-cobranca.html"), "legacy").unwrap();

        let store = FsTemplateStore::new(dir.path());
        let mut generator = Generator::new(engine(), store, Catalog::initial(), Layout::Detailed);
        generator.run().unwrap();
        generator.run().unwrap();

        let written = std::fs::read_to_string(dir.path().join("primeira-cobranca.html")).unwrap();
        let entry = Catalog::initial().get("primeira-cobranca.html").unwrap();
        let expected = engine()
            .assemble(&DocumentRequest::new(entry.body, Layout::Detailed))
            .unwrap();
        assert_eq!(written, expected);
        assert!(written.contains("{{valor_formato}}"));
        assert!(written.contains("&copy; {{ano}} {{empresa_nome}}."));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("primeira-cobranca.html.backup")).unwrap(),
            "legacy"
        );
    }
}
