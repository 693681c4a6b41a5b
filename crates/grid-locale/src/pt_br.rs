//! Brazilian Portuguese text for the grid's UI chrome.
//!
//! Entries are listed in the order the grid's resource file defines them,
//! which matters for `applyFilter`: it is defined twice and the later
//! definition (`"Aplicar"`) is the one kept.

use std::sync::OnceLock;

use tracing::{debug, error};

use crate::catalog::LocaleStrings;

/// Locale tag of the Brazilian Portuguese table.
pub const PT_BR: &str = "pt-BR";

enum Raw {
    Lit(&'static str),
    Tpl(&'static str),
}

use Raw::{Lit, Tpl};

#[rustfmt::skip]
const ENTRIES: &[(&str, Raw)] = &[
    // Accessibility
    ("ariaAdvancedFilterBuilderItem", Tpl("{0}. Nível {1}. Pressione ENTER para editar")),
    ("ariaAdvancedFilterBuilderItemValidation", Tpl("{0}. Nível {1}. {2} Pressione ENTER para editar")),
    ("ariaAdvancedFilterBuilderList", Lit("Lista de Filtros Avançados")),
    ("ariaAdvancedFilterBuilderFilterItem", Lit("Condição de Filtro")),
    ("ariaAdvancedFilterBuilderGroupItem", Lit("Grupo de Filtro")),
    ("ariaAdvancedFilterBuilderColumn", Lit("Coluna")),
    ("ariaAdvancedFilterBuilderOption", Lit("Opção")),
    ("ariaAdvancedFilterBuilderValue", Lit("Valor")),
    ("ariaAdvancedFilterBuilderJoinOperator", Lit("Operador de Junção")),
    ("ariaAdvancedFilterInput", Lit("Entrada de Filtro Avançado")),
    ("ariaLabelAdvancedFilterAutocomplete", Lit("Autocompletar Filtro Avançado")),

    // Advanced filter operators
    ("advancedFilterContains", Lit("contém")),
    ("advancedFilterNotContains", Lit("não contém")),
    ("advancedFilterTextEquals", Lit("igual")),
    ("advancedFilterTextNotEqual", Lit("não igual")),
    ("advancedFilterStartsWith", Lit("começa com")),
    ("advancedFilterEndsWith", Lit("termina com")),
    ("advancedFilterBlank", Lit("está em branco")),
    ("advancedFilterNotBlank", Lit("não está em branco")),
    ("advancedFilterEquals", Lit("=")),
    ("advancedFilterNotEqual", Lit("!=")),
    ("advancedFilterGreaterThan", Lit(">")),
    ("advancedFilterGreaterThanOrEqual", Lit(">=")),
    ("advancedFilterLessThan", Lit("<")),
    ("advancedFilterLessThanOrEqual", Lit("<=")),
    ("advancedFilterTrue", Lit("é verdadeiro")),
    ("advancedFilterFalse", Lit("é falso")),
    ("advancedFilterAnd", Lit("E")),
    ("advancedFilterOr", Lit("OU")),
    ("advancedFilterApply", Lit("Aplicar")),
    ("advancedFilterBuilder", Lit("Construtor")),

    // Advanced filter validation
    ("advancedFilterValidationMissingColumn", Lit("Coluna ausente")),
    ("advancedFilterValidationMissingOption", Lit("Opção ausente")),
    ("advancedFilterValidationMissingValue", Lit("Valor ausente")),
    ("advancedFilterValidationInvalidColumn", Lit("Coluna não encontrada")),
    ("advancedFilterValidationInvalidOption", Lit("Opção não encontrada")),
    ("advancedFilterValidationMissingQuote", Lit("Valor está sem aspas finais")),
    ("advancedFilterValidationNotANumber", Lit("Valor não é um número")),
    ("advancedFilterValidationInvalidDate", Lit("Valor não é uma data válida")),
    ("advancedFilterValidationMissingCondition", Lit("Condição ausente")),
    ("advancedFilterValidationJoinOperatorMismatch", Lit("Operadores de junção dentro de uma condição devem ser iguais")),
    ("advancedFilterValidationInvalidJoinOperator", Lit("Operador de junção não encontrado")),
    ("advancedFilterValidationMissingEndBracket", Lit("Falta parêntese de fechamento")),
    ("advancedFilterValidationExtraEndBracket", Lit("Muitos parênteses de fechamento")),
    ("advancedFilterValidationMessage", Tpl("Expressão contém um erro. {0} - {1}.")),
    ("advancedFilterValidationMessageAtEnd", Tpl("Expressão contém um erro. {0} no final da expressão.")),

    // Advanced filter builder
    ("advancedFilterBuilderTitle", Lit("Filtro Avançado")),
    ("advancedFilterBuilderApply", Lit("Aplicar")),
    ("advancedFilterBuilderCancel", Lit("Cancelar")),
    ("advancedFilterBuilderAddButtonTooltip", Lit("Adicionar Filtro ou Grupo")),
    ("advancedFilterBuilderRemoveButtonTooltip", Lit("Remover")),
    ("advancedFilterBuilderMoveUpButtonTooltip", Lit("Mover para Cima")),
    ("advancedFilterBuilderMoveDownButtonTooltip", Lit("Mover para Baixo")),
    ("advancedFilterBuilderAddJoin", Lit("Adicionar Grupo")),
    ("advancedFilterBuilderAddCondition", Lit("Adicionar Filtro")),
    ("advancedFilterBuilderSelectColumn", Lit("Selecione uma coluna")),
    ("advancedFilterBuilderSelectOption", Lit("Selecione uma opção")),
    ("advancedFilterBuilderEnterValue", Lit("Digite um valor...")),
    ("advancedFilterBuilderValidationAlreadyApplied", Lit("Filtro atual já aplicado.")),
    ("advancedFilterBuilderValidationIncomplete", Lit("Nem todas as condições estão completas.")),
    ("advancedFilterBuilderValidationSelectColumn", Lit("Deve selecionar uma coluna.")),
    ("advancedFilterBuilderValidationSelectOption", Lit("Deve selecionar uma opção.")),
    ("advancedFilterBuilderValidationEnterValue", Lit("Deve digitar um valor.")),

    // Column menu
    ("pinColumn", Lit("Fixar Coluna")),
    ("valueAgg", Lit("Valor Agregado")),
    ("autosizeThisColumn", Lit("Autoajustar Esta Coluna")),
    ("autosizeAllColumns", Lit("Autoajustar Todas as Colunas")),
    ("groupBy", Lit("Agrupar por")),
    ("ungroupBy", Lit("Desagrupar por")),
    ("sortAscending", Lit("Ordem Crescente")),
    ("sortDescending", Lit("Ordem Decrescente")),
    ("resetColumns", Lit("Redefinir Colunas")),
    ("expandAll", Lit("Expandir Todos")),
    ("collapseAll", Lit("Recolher Todos")),
    ("toolPanel", Lit("Painel de Ferramentas")),
    ("export", Lit("Exportar")),
    ("csvExport", Lit("Exportar CSV")),
    ("excelExport", Lit("Exportar Excel (.xlsx)")),
    ("excelXmlExport", Lit("Exportar Excel (.xml)")),
    ("copy", Lit("Copiar")),
    ("copyWithHeaders", Lit("Copiar com Cabeçalhos")),
    ("copyWithGroupHeaders", Lit("Copiar com Grupo de Cabeçalhos")),
    ("cut", Lit("Recortar")),
    ("ctrlC", Lit("Ctrl+C")),
    ("paste", Lit("Colar")),
    ("ctrlV", Lit("Ctrl+V")),
    ("columnChooser", Lit("Escolher Colunas")),
    ("sortUnSort", Lit("Limpar Ordenamento")),
    ("noPin", Lit("Não Fixar")),
    ("pinLeft", Lit("Fixar a Esquerda")),
    ("pinRight", Lit("Fixar a Direita")),

    // Tool panels
    ("columns", Lit("Colunas")),
    ("filters", Lit("Filtros")),
    ("pivotMode", Lit("Modo Pivot")),
    ("groups", Lit("Grupos de Linhas")),
    ("rowGroupColumnsEmptyMessage", Lit("Arraste aqui para definir grupos de linhas")),
    ("values", Lit("Valores")),
    ("valueColumnsEmptyMessage", Lit("Arraste aqui para agregar")),
    ("pivots", Lit("Rótulos de Coluna")),
    ("pivotColumnsEmptyMessage", Lit("Arraste aqui para definir rótulos de coluna")),

    // Set filter
    ("selectAll", Lit("Selecionar Tudo")),
    ("selectAllSearchResults", Lit("Selecionar Todos os Resultados da Busca")),
    ("searchOoo", Lit("Procurar...")),
    ("blanks", Lit("Em branco")),
    ("noMatches", Lit("Sem Resultados")),

    // Number and text filters
    ("filterOoo", Lit("Filtrar...")),
    ("applyFilter", Lit("Aplicar Filtro...")),

    // Number filter options
    ("equals", Lit("Igual")),
    ("notEqual", Lit("Diferente")),
    ("lessThan", Lit("Menor que")),
    ("greaterThan", Lit("Maior que")),
    ("lessThanOrEqual", Lit("Menor ou igual")),
    ("greaterThanOrEqual", Lit("Maior ou igual")),
    ("inRange", Lit("No intervalo")),

    // Text filter options
    ("contains", Lit("Contém")),
    ("notContains", Lit("Não contém")),
    ("startsWith", Lit("Começa com")),
    ("endsWith", Lit("Termina com")),

    // Date filter
    ("dateFormatOoo", Lit("aaaa-mm-dd")),

    // Filter conditions
    ("andCondition", Lit("E")),
    ("orCondition", Lit("OU")),

    // Filter buttons
    // Second definition of applyFilter; last write wins, so this is the
    // text the grid shows for both the action and the button.
    ("applyFilter", Lit("Aplicar")),
    ("resetFilter", Lit("Redefinir")),
    ("clearFilter", Lit("Limpar")),
    ("cancelFilter", Lit("Cancelar")),

    // Filter titles
    ("textFilter", Lit("Filtro de Texto")),
    ("numberFilter", Lit("Filtro Numérico")),
    ("dateFilter", Lit("Filtro de Data")),
    ("setFilter", Lit("Filtro de Conjunto")),

    // Status bar
    ("noRowsToShow", Lit("Nenhuma linha para mostrar")),

    // Charts
    ("pivotChartAndPivotMode", Lit("Gráfico Pivot & Modo Pivot")),
    ("pivotChart", Lit("Gráfico Pivot")),
    ("chartRange", Lit("Intervalo do Gráfico")),
    ("chartSettings", Lit("Configurações do Gráfico")),
    ("chartType", Lit("Tipo de Gráfico")),
    ("chartTitle", Lit("Título do Gráfico")),
    ("chartBackground", Lit("Fundo do Gráfico")),
    ("chartSeries", Lit("Séries")),
    ("chartAxes", Lit("Eixos")),
    ("chartLegend", Lit("Legenda")),
    ("chartOptions", Lit("Opções")),
    ("menu", Lit("Menu")),
    ("chart", Lit("Gráfico")),
    ("groupedColumn", Lit("Coluna Agrupada")),
    ("stackedColumn", Lit("Coluna Empilhada")),
    ("normalizedColumn", Lit("Coluna Normalizada")),
    ("groupedBar", Lit("Barra Agrupada")),
    ("stackedBar", Lit("Barra Empilhada")),
    ("normalizedBar", Lit("Barra Normalizada")),
    ("pieChart", Lit("Gráfico de Pizza")),
    ("donutChart", Lit("Gráfico de Donut")),
    ("line", Lit("Linha")),
    ("xyChart", Lit("XY (Dispersão)")),
    ("scatter", Lit("Dispersão")),
    ("bubble", Lit("Bolhas")),
    ("area", Lit("Área")),
    ("stackedArea", Lit("Área Empilhada")),
    ("normalizedArea", Lit("Área Normalizada")),
    ("histogram", Lit("Histograma")),
];

/// Shared, lazily built pt-BR table.
pub fn pt_br() -> &'static LocaleStrings {
    static TABLE: OnceLock<LocaleStrings> = OnceLock::new();
    TABLE.get_or_init(build_pt_br)
}

/// Build a fresh pt-BR table.
///
/// A built-in template that fails to parse is kept as a literal and logged
/// at `error`, so lookups never panic.
#[must_use]
pub fn build_pt_br() -> LocaleStrings {
    let mut strings = LocaleStrings::new(PT_BR);
    for (key, raw) in ENTRIES {
        match raw {
            Lit(text) => strings.insert(*key, *text),
            Tpl(pattern) => {
                if let Err(err) = strings.insert_template(*key, *pattern) {
                    error!(key, %err, "built-in template rejected; storing as literal");
                    strings.insert(*key, *pattern);
                }
            }
        }
    }
    debug!(
        locale = PT_BR,
        entries = strings.len(),
        templates = strings.template_keys().len(),
        overridden = ?strings.overridden_keys(),
        "locale table built"
    );
    strings
}
