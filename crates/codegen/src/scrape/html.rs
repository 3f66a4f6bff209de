//! HTML reference scraper.
//!
//! Reads the mkdocstrings layout used by the Mathesar API docs:
//! - `div.doc-function`: heading, description paragraphs, then titled
//!   `Parameters:` / `Returns:` / `Attributes:` tables, then `details` source blocks
//! - `div.doc-class`: `Bases:` paragraph, description, `Attributes:` table
//! - `div.doc-attribute`: alias definition in the second `code` element

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::{ScrapeDocument, ScrapedAttr, ScrapedClass, ScrapedMethod, ScrapedParam, ScrapedReturn};
use crate::config::Substitutions;
use crate::error::{CodegenError, CodegenResult};
use crate::ir::utils::replace_identifier;

fn selector(css: &str) -> CodegenResult<Selector> {
    Selector::parse(css).map_err(|err| CodegenError::Scrape(format!("invalid selector `{css}`: {err}")))
}

fn scrape_err(message: impl Into<String>) -> CodegenError {
    CodegenError::Scrape(message.into())
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn child_elements(element: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    element.children().filter_map(ElementRef::wrap).collect()
}

fn join_text(elements: &[ElementRef<'_>]) -> String {
    elements
        .iter()
        .map(|el| el.text().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Parse a full documentation page.
pub fn parse_document(html: &str, substitutions: &Substitutions) -> CodegenResult<ScrapeDocument> {
    let dom = Html::parse_document(html);
    let scraper = Scraper::new(substitutions)?;

    let methods = dom
        .select(&selector("div.doc-function")?)
        .map(|el| scraper.function(el))
        .collect::<CodegenResult<Vec<_>>>()?;
    let classes = dom
        .select(&selector("div.doc-class")?)
        .map(|el| scraper.class(el))
        .collect::<CodegenResult<Vec<_>>>()?;
    let attributes = dom
        .select(&selector("div.doc-attribute")?)
        .map(|el| scraper.attribute(el))
        .collect::<CodegenResult<Vec<_>>>()?;

    Ok(ScrapeDocument {
        methods,
        classes,
        attributes,
    })
}

struct Scraper<'a> {
    substitutions: &'a Substitutions,
    heading: Selector,
    contents: Selector,
    code: Selector,
    row: Selector,
    cell: Selector,
}

impl<'a> Scraper<'a> {
    fn new(substitutions: &'a Substitutions) -> CodegenResult<Self> {
        Ok(Self {
            substitutions,
            heading: selector("h3.doc-heading")?,
            contents: selector("div.doc-contents")?,
            code: selector("code")?,
            row: selector("tbody > tr")?,
            cell: selector("td")?,
        })
    }

    fn heading(&self, element: ElementRef<'_>) -> CodegenResult<String> {
        let heading = element
            .select(&self.heading)
            .next()
            .ok_or_else(|| scrape_err("documentation block without a heading"))?;
        Ok(text_of(heading).replace('¶', "").trim().to_string())
    }

    fn contents<'e>(&self, element: ElementRef<'e>, name: &str) -> CodegenResult<Vec<ElementRef<'e>>> {
        let contents = element
            .select(&self.contents)
            .next()
            .ok_or_else(|| scrape_err(format!("`{name}` has no contents block")))?;
        Ok(child_elements(contents))
    }

    fn cells(&self, row: ElementRef<'_>) -> Vec<String> {
        row.select(&self.cell).map(text_of).collect()
    }

    fn function(&self, element: ElementRef<'_>) -> CodegenResult<ScrapedMethod> {
        let heading = self.heading(element)?;
        let name = heading.strip_suffix('_').unwrap_or(&heading).to_string();
        let content = self.contents(element, &name)?;
        let mut method = ScrapedMethod {
            name,
            ..Default::default()
        };

        let mut idx = content.len();
        while idx > 0 {
            idx -= 1;
            let item = content[idx];
            match item.value().name() {
                "details" => continue,
                "table" => {
                    if idx == 0 {
                        return Err(scrape_err(format!("untitled table in `{}`", method.name)));
                    }
                    idx -= 1;
                    match text_of(content[idx]).as_str() {
                        "Returns:" => method.returns = Some(self.returns(item, &method.name)?),
                        "Parameters:" => method.params = self.parameters(item, &method.name)?,
                        "Attributes:" => {
                            method.params = self
                                .attributes(item, &method.name)?
                                .into_iter()
                                .map(|attr| ScrapedParam {
                                    name: attr.name,
                                    ty: attr.ty.unwrap_or_default(),
                                    description: attr.description,
                                    default: None,
                                })
                                .collect();
                        }
                        other => {
                            return Err(scrape_err(format!(
                                "unknown table title `{other}` in `{}`",
                                method.name
                            )));
                        }
                    }
                }
                "p" => {
                    let description = join_text(&content[..=idx]);
                    method.description = (!description.is_empty()).then_some(description);
                    break;
                }
                other => {
                    return Err(scrape_err(format!(
                        "unexpected <{other}> in `{}`",
                        method.name
                    )));
                }
            }
        }

        debug!(method = %method.name, params = method.params.len(), "Scraped method.");
        Ok(method)
    }

    fn returns(&self, table: ElementRef<'_>, owner: &str) -> CodegenResult<ScrapedReturn> {
        let mut rows = table.select(&self.row).map(|row| self.cells(row));
        let first = rows
            .next()
            .ok_or_else(|| scrape_err(format!("empty Returns table in `{owner}`")))?;
        let [ty, description] = <[String; 2]>::try_from(first)
            .map_err(|_| scrape_err(format!("Returns row in `{owner}` must have two cells")))?;
        let ty = self.substitute_return(&ty);

        let mut returns = ScrapedReturn { ty, description };
        for row in rows {
            let [row_ty, description] = <[String; 2]>::try_from(row)
                .map_err(|_| scrape_err(format!("Returns row in `{owner}` must have two cells")))?;
            if self.substitute_return(&row_ty) != returns.ty {
                return Err(scrape_err(format!(
                    "`{owner}` documents conflicting return types `{}` and `{row_ty}`",
                    returns.ty
                )));
            }
            if !returns.description.is_empty() && !description.is_empty() {
                returns.description.push(' ');
            }
            returns.description.push_str(&description);
        }
        Ok(returns)
    }

    fn substitute_return(&self, ty: &str) -> String {
        self.substitutions
            .return_types
            .iter()
            .fold(ty.to_string(), |acc, (from, to)| replace_identifier(&acc, from, to))
    }

    fn parameters(&self, table: ElementRef<'_>, owner: &str) -> CodegenResult<Vec<ScrapedParam>> {
        table
            .select(&self.row)
            .map(|row| {
                let [name, ty, description, default] = <[String; 4]>::try_from(self.cells(row))
                    .map_err(|_| {
                        scrape_err(format!("Parameters row in `{owner}` must have four cells"))
                    })?;
                Ok(ScrapedParam {
                    name,
                    ty,
                    description,
                    default: (default != "required").then_some(default),
                })
            })
            .collect()
    }

    fn attributes(&self, table: ElementRef<'_>, owner: &str) -> CodegenResult<Vec<ScrapedAttr>> {
        table
            .select(&self.row)
            .map(|row| {
                let [name, ty, description] = <[String; 3]>::try_from(self.cells(row))
                    .map_err(|_| {
                        scrape_err(format!("Attributes row in `{owner}` must have three cells"))
                    })?;
                let ty = self
                    .substitutions
                    .attr_types
                    .get(&ty)
                    .cloned()
                    .unwrap_or(ty);
                let absent = self
                    .substitutions
                    .absent_keys
                    .get(owner)
                    .is_some_and(|names| names.contains(&name));
                let ty = if absent { format!("NotRequired[{ty}]") } else { ty };
                Ok(ScrapedAttr {
                    name,
                    ty: Some(ty),
                    description,
                })
            })
            .collect()
    }

    fn class(&self, element: ElementRef<'_>) -> CodegenResult<ScrapedClass> {
        let name = self.heading(element)?;
        let content = self.contents(element, &name)?;

        let bases_p = content
            .first()
            .filter(|el| el.value().classes().any(|c| c == "doc-class-bases"))
            .ok_or_else(|| scrape_err(format!("class `{name}` has no Bases paragraph")))?;
        let bases = bases_p
            .select(&self.code)
            .next()
            .map(text_of)
            .ok_or_else(|| scrape_err(format!("class `{name}` has an empty Bases paragraph")))?;

        let table_idx = content
            .iter()
            .rposition(|el| el.value().name() == "table")
            .filter(|&idx| idx > 0);

        let (attrs, description_end) = match table_idx {
            Some(idx) => (self.attributes(content[idx], &name)?, idx - 1),
            None => match content
                .iter()
                .rposition(|el| text_of(*el).lines().any(|line| line.trim() == "Attributes:"))
                .filter(|&idx| idx > 0)
            {
                Some(idx) => (attributes_fallback(&text_of(content[idx])), idx),
                None => (
                    Vec::new(),
                    content
                        .iter()
                        .rposition(|el| el.value().name() != "details")
                        .map_or(1, |idx| idx + 1),
                ),
            },
        };

        let description = join_text(content.get(1..description_end.max(1)).unwrap_or_default());
        debug!(class = %name, attrs = attrs.len(), "Scraped class.");
        Ok(ScrapedClass {
            name,
            bases,
            description,
            attrs,
        })
    }

    fn attribute(&self, element: ElementRef<'_>) -> CodegenResult<String> {
        element
            .select(&self.code)
            .nth(1)
            .map(text_of)
            .ok_or_else(|| scrape_err("module attribute without a definition"))
    }
}

/// `name: description` lines following an `Attributes:` line.
fn attributes_fallback(text: &str) -> Vec<ScrapedAttr> {
    let mut attrs: Vec<ScrapedAttr> = Vec::new();
    for line in text
        .lines()
        .skip_while(|line| line.trim() != "Attributes:")
        .skip(1)
    {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.split_once(':') {
            Some((name, description)) if !name.trim().contains(' ') => attrs.push(ScrapedAttr {
                name: name.trim().to_string(),
                ty: None,
                description: description.trim().to_string(),
            }),
            _ => {
                if let Some(last) = attrs.last_mut() {
                    last.description.push(' ');
                    last.description.push_str(line);
                }
            }
        }
    }
    attrs
}
