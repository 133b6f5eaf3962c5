use std::collections::BTreeMap;

use hangman_types::ConfigurationFault;

/// A candidate word with its one-line hint.
#[derive(Debug, Clone)]
pub struct WordEntry {
    pub word: String,
    pub hint: String,
}

impl WordEntry {
    pub fn new(word: &str, hint: &str) -> Self {
        Self {
            word: word.to_ascii_uppercase(),
            hint: hint.to_string(),
        }
    }
}

/// Immutable catalog of themed word categories, built once at startup
/// and injected into the word bank.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: BTreeMap<String, Vec<WordEntry>>,
}

impl Catalog {
    /// Validates and constructs a catalog. A malformed catalog is a fatal
    /// configuration error, never a runtime error to recover from.
    pub fn new(categories: BTreeMap<String, Vec<WordEntry>>) -> Result<Self, ConfigurationFault> {
        if categories.is_empty() {
            return Err(ConfigurationFault("no categories configured".into()));
        }

        for (name, entries) in &categories {
            if name.trim().is_empty() {
                return Err(ConfigurationFault("category with empty name".into()));
            }
            if entries.is_empty() {
                return Err(ConfigurationFault(format!(
                    "category '{name}' has no words"
                )));
            }

            let mut seen = std::collections::HashSet::new();
            for entry in entries {
                if entry.word.is_empty() {
                    return Err(ConfigurationFault(format!(
                        "category '{name}' contains an empty word"
                    )));
                }
                if !entry
                    .word
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c == '-')
                {
                    return Err(ConfigurationFault(format!(
                        "word '{}' in category '{name}' is not uppercase alphabetic",
                        entry.word
                    )));
                }
                if !entry.word.chars().any(|c| c.is_ascii_alphabetic()) {
                    return Err(ConfigurationFault(format!(
                        "word '{}' in category '{name}' has no letters",
                        entry.word
                    )));
                }
                if entry.hint.trim().is_empty() {
                    return Err(ConfigurationFault(format!(
                        "word '{}' in category '{name}' has no hint",
                        entry.word
                    )));
                }
                if !seen.insert(entry.word.as_str()) {
                    return Err(ConfigurationFault(format!(
                        "word '{}' appears twice in category '{name}'",
                        entry.word
                    )));
                }
            }
        }

        Ok(Self { categories })
    }

    /// The built-in git/github catalog shipped with the game.
    pub fn builtin() -> Result<Self, ConfigurationFault> {
        let mut categories = BTreeMap::new();
        for &(name, entries) in BUILTIN_CATEGORIES {
            let entries = entries
                .iter()
                .map(|&(word, hint)| WordEntry::new(word, hint))
                .collect();
            categories.insert(name.to_string(), entries);
        }
        Self::new(categories)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[WordEntry])> {
        self.categories
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    pub fn entries(&self, category: &str) -> Option<&[WordEntry]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn hint_for(&self, category: &str, word: &str) -> Option<&str> {
        self.entries(category)?
            .iter()
            .find(|e| e.word.eq_ignore_ascii_case(word))
            .map(|e| e.hint.as_str())
    }
}

const BUILTIN_CATEGORIES: &[(&str, &[(&str, &str)])] = &[
    (
        "git",
        &[
            ("COMMIT", "Salvar mudanças no repositório"),
            ("BRANCH", "Linha de desenvolvimento paralela"),
            ("MERGE", "Combinar duas branches"),
            ("PUSH", "Enviar commits para repositório remoto"),
            ("PULL", "Baixar e mesclar mudanças do remoto"),
            ("CLONE", "Copiar um repositório completo"),
            ("FORK", "Criar sua própria cópia de um repositório"),
            ("REPOSITORY", "Local onde o código é armazenado"),
            ("REMOTE", "Repositório em outro local"),
            ("STAGING", "Área de preparação antes do commit"),
            ("CHECKOUT", "Mudar de branch ou restaurar arquivos"),
            ("REBASE", "Reorganizar histórico de commits"),
            ("STASH", "Guardar mudanças temporariamente"),
            ("TAG", "Marcar uma versão específica"),
            ("DIFF", "Mostrar diferenças entre arquivos"),
            ("LOG", "Histórico de commits"),
            ("STATUS", "Estado atual do repositório"),
            ("ADD", "Adicionar arquivos ao staging"),
            ("RESET", "Desfazer mudanças"),
            ("ORIGIN", "Repositório remoto padrão"),
            ("HEAD", "Referência para o commit atual"),
            ("FETCH", "Buscar dados do remoto sem mesclar"),
            ("BLOB", "Objeto de arquivo no Git"),
            ("TREE", "Estrutura de diretórios e arquivos"),
            ("INDEX", "Área de indexação do Git"),
            ("SUBMODULE", "Repositório dentro de outro repositório"),
            ("HOOK", "Script executado em eventos do Git"),
            ("CONFLICT", "Quando há alterações incompatíveis"),
            ("TRACK", "Acompanhar branch remoto"),
            ("IGNORE", "Arquivos que não serão versionados"),
            ("WORKTREE", "Cópia de trabalho do repositório"),
            ("FASTFORWARD", "Atualização linear de branch"),
            ("SQUASH", "Unir vários commits em um só"),
            ("CHERRY-PICK", "Aplicar commit específico em outra branch"),
            ("DESCRIBE", "Mostrar nome de tag mais próxima"),
            ("CREDENTIAL", "Dados de autenticação do Git"),
            ("CONFIG", "Arquivo de configuração do Git"),
            ("GITFLOW", "Modelo de ramificação popular"),
            ("GITHUB", "Plataforma de hospedagem de código"),
            ("GITLAB", "Alternativa ao GitHub"),
            ("BITBUCKET", "Outra plataforma de repositórios"),
        ],
    ),
    (
        "github",
        &[
            ("ISSUES", "Sistema de rastreamento de bugs e tarefas"),
            ("PULLREQUEST", "Proposta de mudanças no código"),
            ("ACTIONS", "CI/CD automático do GitHub"),
            ("WORKFLOWS", "Sequência de jobs automáticos"),
            ("PAGES", "Hospedagem gratuita de sites estáticos"),
            ("RELEASES", "Versões publicadas do software"),
            ("WIKI", "Documentação colaborativa"),
            ("GIST", "Compartilhar snippets de código"),
            ("COPILOT", "IA que ajuda a programar"),
            ("CODESPACES", "Ambiente de desenvolvimento na nuvem"),
        ],
    ),
];
