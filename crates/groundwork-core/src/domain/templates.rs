//! Static template catalog.
//!
//! Every file the emitter writes comes from this module (or from
//! [`manifest`](super::manifest), which owns the build-manifest template).
//! Each template is an immutable string constant colocated with the
//! placeholder keys it consumes, documented per constant. Substitution is
//! literal `{{KEY}}` replacement — no conditionals, no loops. Constants
//! without documented keys are emitted verbatim.

/// Literal placeholder substitution: each `{{KEY}}` marker is replaced by
/// its value everywhere it occurs. Brace sequences that match no key pass
/// through untouched (the CI workflow keeps its `${{ github.* }}`
/// expressions, the Sphinx config its f-string braces).
pub fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut rendered = template.to_string();
    for (key, value) in substitutions {
        rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
    }
    rendered
}

/// Lint/format hook pipeline, emitted verbatim.
pub const PRE_COMMIT_CONFIG: &str = r#"ci:
  autoupdate_commit_msg: "chore: update pre-commit hooks"
  autofix_commit_msg: "style: pre-commit fixes"

repos:
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: "v6.0.0"
    hooks:
      - id: check-added-large-files
      - id: check-case-conflict
      - id: check-merge-conflict
      - id: check-symlinks
      - id: check-yaml
      - id: debug-statements
      - id: end-of-file-fixer
      - id: mixed-line-ending
      - id: name-tests-test
        args: ["--pytest-test-first"]
      - id: trailing-whitespace

  - repo: https://github.com/astral-sh/ruff-pre-commit
    rev: "v0.12.9"
    hooks:
      - id: ruff
        args: ["--fix", "--show-fixes"]
      - id: ruff-format

  - repo: https://github.com/pre-commit/mirrors-mypy
    rev: "v1.17.1"
    hooks:
      - id: mypy
        files: src|tests
        args: [--config-file=pyproject.toml]
        additional_dependencies:
          - pytest

  - repo: https://github.com/shellcheck-py/shellcheck-py
    rev: "v0.11.0.1"
    hooks:
      - id: shellcheck

  - repo: https://github.com/adamchainz/blacken-docs
    rev: "1.19.1"
    hooks:
      - id: blacken-docs
        additional_dependencies:
          - black==24.10.0

  - repo: https://github.com/codespell-project/codespell
    rev: v2.4.1
    hooks:
      - id: codespell
        exclude: ^(LICENSE$)

  - repo: https://github.com/henryiii/validate-pyproject-schema-store
    rev: 2025.08.15
    hooks:
      - id: validate-pyproject

  - repo: https://github.com/python-jsonschema/check-jsonschema
    rev: 0.33.3
    hooks:
      - id: check-readthedocs
      - id: check-github-workflows

  - repo: local
    hooks:
      - id: coverage
        name: coverage
        entry: bash -c 'if command -v uv >/dev/null 2>&1; then uv run coverage erase && uv run coverage run -m pytest && uv run coverage report --fail-under=85; else coverage erase && coverage run -m pytest && coverage report --fail-under=85; fi'
        language: system
        types: [python]
        pass_filenames: false
"#;

/// Docs-build configuration, emitted verbatim.
pub const READTHEDOCS_CONFIG: &str = r#"# https://docs.readthedocs.com/platform/stable/build-customization.html#install-dependencies-with-uv

version: 2

sphinx:
   configuration: docs/conf.py

build:
   os: ubuntu-24.04
   tools:
      python: "3.13"
   jobs:
      pre_create_environment:
         - asdf plugin add uv
         - asdf install uv latest
         - asdf global uv latest
      create_environment:
         - uv venv "${READTHEDOCS_VIRTUALENV_PATH}"
      install:
         - UV_PROJECT_ENVIRONMENT="${READTHEDOCS_VIRTUALENV_PATH}" uv sync --group docs
"#;

/// Keys: `AUTHOR_LABEL`.
pub const LICENSE_TEXT: &str = r#"MIT License

Copyright (c) 2024 {{AUTHOR_LABEL}}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

/// Keys: `PROJECT_NAME`.
pub const README_STUB: &str = "# {{PROJECT_NAME}}\n\nThis is a STUB.\n";

/// Body shared by every documentation stub page.
pub fn doc_stub(title: &str) -> String {
    format!("# {title}\n\nThis is a STUB.\n")
}

/// Keys: `PROJECT_NAME`.
pub const DOC_INDEX: &str = r#"# {{PROJECT_NAME}} documentation

This is a STUB.

```{toctree}
:maxdepth: 1
:caption: User Guide

introduction
quickstart
concepts
tutorials
```

```{toctree}
:maxdepth: 1
:caption: Developer Guide

architecture
contributing
```

```{toctree}
:maxdepth: 1
:caption: Reference

api/index
```
"#;

/// API reference landing page, emitted verbatim.
pub const DOC_API_INDEX: &str = r#"# API Reference

The API reference is generated automatically from the source code. Modules are
listed roughly in the order you will encounter them.

```{eval-rst}
.. toctree::
   :maxdepth: 2
```

This is a STUB.
"#;

/// Keys: `PROJECT_NAME`, `AUTHOR_LABEL`, `REPOSITORY_URL`.
pub const DOC_CONF: &str = r#""""Sphinx configuration for the {{PROJECT_NAME}} documentation."""

from __future__ import annotations

import datetime as _dt
import sys
from pathlib import Path

PROJECT_ROOT = Path(__file__).resolve().parents[1]
sys.path.insert(0, str(PROJECT_ROOT / "src"))

project = "{{PROJECT_NAME}}"
author = "{{AUTHOR_LABEL}}"
copyright = f"{_dt.datetime.now().year}, {{AUTHOR_LABEL}}"

extensions = [
    "myst_nb",
    "sphinx_design",
    "sphinx.ext.autodoc",
    "sphinx.ext.autosummary",
    "sphinx.ext.napoleon",
    "sphinx.ext.intersphinx",
    "sphinx.ext.viewcode",
    "sphinxcontrib.mermaid",
]

autosummary_generate = True
autosummary_imported_members = False
autodoc_typehints = "description"
napoleon_google_docstring = True
napoleon_numpy_docstring = True

autodoc_default_options = {
    "members": True,
    "undoc-members": False,
    "show-inheritance": False,
}
autodoc_member_order = "bysource"

myst_enable_extensions = [
    "colon_fence",
    "deflist",
    "html_image",
]

myst_fence_as_directive = ["mermaid"]

nb_execution_mode = "off"

html_theme = "furo"
html_static_path = ["_static"]
html_css_files = ["custom.css"]
html_logo = None
html_theme_options = {
    "footer_icons": [
        {
            "name": "GitHub",
            "url": "{{REPOSITORY_URL}}",
            "html": """
                <svg stroke="currentColor" fill="currentColor" stroke-width="0" viewBox="0 0 16 16">
                    <path fill-rule="evenodd" d="M8 0C3.58 0 0 3.58 0 8c0 3.54 2.29 6.53 5.47 7.59.4.07.55-.17.55-.38 0-.19-.01-.82-.01-1.49-2.01.37-2.53-.49-2.69-.94-.09-.23-.48-.94-.82-1.13-.28-.15-.68-.52-.01-.53.63-.01 1.08.58 1.23.82.72 1.21 1.87.87 2.33.66.07-.52.28-.87.51-1.07-1.78-.2-3.64-.89-3.64-3.95 0-.87.31-1.59.82-2.15-.08-.2-.36-1.02.08-2.12 0 0 .67-.21 2.2.82.64-.18 1.32-.27 2-.27.68 0 1.36.09 2 .27 1.53-1.04 2.2-.82 2.2-.82.44 1.1.16 1.92.08 2.12.51.56.82 1.27.82 2.15 0 3.07-1.87 3.75-3.65 3.95.29.25.54.73.54 1.48 0 1.07-.01 1.93-.01 2.2 0 .21.15.46.55.38A8.013 8.013 0 0 0 16 8c0-4.42-3.58-8-8-8z"></path>
                </svg>
            """,
            "class": "",
        },
    ],
    "source_repository": "{{REPOSITORY_URL}}",
    "source_branch": "main",
    "source_directory": "docs/",
}

intersphinx_mapping = {
    "python": ("https://docs.python.org/3", None),
    "numpy": ("https://numpy.org/doc/stable/", None),
    "jax": ("https://jax.readthedocs.io/en/latest/", None),
}

templates_path = ["_templates"]
exclude_patterns = ["_build", "Thumbs.db", ".DS_Store", "python/"]

html_title = " "
html_baseurl = "https://{{PROJECT_NAME}}.readthedocs.io/"
"#;

/// Docs stylesheet, emitted verbatim.
pub const DOCS_CUSTOM_CSS: &str = r#"/* Force left alignment for autosummary tables in API reference */
table.autosummary {
    margin-left: 0 !important;
    margin-right: auto !important;
}

/* Force left alignment for all docutils tables */
table.docutils {
    margin-left: 0 !important;
    margin-right: auto !important;
}

/* Force left alignment for longtable */
table.longtable {
    margin-left: 0 !important;
    margin-right: auto !important;
}

/* Ensure function/class signature blocks are left-aligned */
dl.py,
dl.function,
dl.class,
dl.method,
dl.attribute {
    text-align: left !important;
}

/* Force left alignment for definition lists */
dl {
    margin-left: 0 !important;
}
"#;

/// Sphinx Makefile, emitted verbatim. Recipe lines are tab-indented.
pub const DOCS_MAKEFILE: &str = r#"# Makefile for Sphinx documentation
# taken from: https://github.com/cms-cat/order/blob/master/docs/Makefile

# You can set these variables from the command line.
SPHINXOPTS  =
SPHINXBUILD = sphinx-build
PAPER       =
BUILDDIR    = _build

# User-friendly check for sphinx-build
ifeq ($(shell which $(SPHINXBUILD) >/dev/null 2>&1; echo $$?), 1)
$(error The '$(SPHINXBUILD)' command was not found. Make sure you have Sphinx installed, then set the SPHINXBUILD environment variable to point to the full path of the '$(SPHINXBUILD)' executable. Alternatively you can add the directory with the executable to your PATH. If you don't have Sphinx installed, grab it from http://sphinx-doc.org/)
endif

# Internal variables.
PAPEROPT_a4     = -D latex_paper_size=a4
PAPEROPT_letter = -D latex_paper_size=letter
ALLSPHINXOPTS   = -d $(BUILDDIR)/doctrees $(PAPEROPT_$(PAPER)) $(SPHINXOPTS) .
# the i18n builder cannot share the environment and doctrees with the others
I18NSPHINXOPTS  = $(PAPEROPT_$(PAPER)) $(SPHINXOPTS) .

.PHONY: help clean html

help:
	@echo "Please use `make <target>' where <target> is one of"
	@echo "  clean      to cleanup all build files"
	@echo "  html       to make standalone HTML files"

clean:
	rm -rf $(BUILDDIR)/*

html:
	$(SPHINXBUILD) -b html $(ALLSPHINXOPTS) $(BUILDDIR)/html
	@echo
	@echo "Build finished. The HTML pages are in $(BUILDDIR)/html."
"#;

/// Keys: `PROJECT_NAME`, `DESCRIPTION`, `PACKAGE_NAME`, `AUTHOR_LABEL`.
pub const MODULE_INIT: &str = r#""""
{{PROJECT_NAME}}: {{DESCRIPTION}}
"""

from __future__ import annotations

import datetime

__name__ = "{{PACKAGE_NAME}}"
__author__ = "{{AUTHOR_LABEL}}"
__copyright__ = f"Copyright {datetime.datetime.now().year}, {{AUTHOR_LABEL}}"
__version__ = "0.0.1"

__all__ = [
    "__version__",
]
"#;

/// CI pipeline, emitted verbatim (its `${{ … }}` expressions belong to the
/// workflow syntax, not to this catalog).
pub const CI_WORKFLOW: &str = r#"name: CI

concurrency:
  group: ${{ github.workflow }}-${{ github.ref }}
  cancel-in-progress: true

on:
  workflow_dispatch:
  pull_request:
  push:
    branches:
      - main

jobs:
  pre-commit:
    name: Format + lint code
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v5
        with:
          fetch-depth: 0
      - uses: actions/setup-python@v6
        with:
          python-version: "3.13"
      - name: Install uv
        uses: astral-sh/setup-uv@v7
      - name: Sync project dependencies
        run: uv sync --group=dev
      - uses: pre-commit/action@v3.0.1
        with:
          extra_args: --all-files

  checks:
    name: Run tests for Python ${{ matrix.python-version }} on ${{ matrix.runs-on }}
    runs-on: ${{ matrix.runs-on }}
    needs: [pre-commit]
    strategy:
      fail-fast: false
      matrix:
        python-version: ["3.11", "3.12", "3.13"]
        runs-on: [ubuntu-latest]

    steps:
      - uses: actions/checkout@v5
        with:
          fetch-depth: 0

      - uses: actions/setup-python@v6
        with:
          python-version: ${{ matrix.python-version }}
          allow-prereleases: true

      - name: Install uv
        uses: astral-sh/setup-uv@v7

      - name: Sync project + test deps
        run: uv sync --group=test

      - name: Test package
        run: >-
          uv run pytest -ra --cov --cov-report=xml --cov-report=term
          --durations=20

  docs:
    name: Build documentation
    runs-on: ubuntu-latest
    needs: [pre-commit]
    steps:
      - uses: actions/checkout@v5
        with:
          fetch-depth: 0

      - uses: actions/setup-python@v6
        with:
          python-version: "3.13"

      - name: Install uv
        uses: astral-sh/setup-uv@v7

      - name: Sync project + docs deps
        run: uv sync --group=docs

      - name: Build docs
        run: uv run sphinx-build -M html docs docs/_build -W --keep-going
"#;

/// Fallback when the process CWD has no `.gitignore` to copy.
pub const DEFAULT_GITIGNORE: &str = "__pycache__/\n*.pyc\n";

/// Always-passing test seeded into the generated `tests/` directory.
pub const PLACEHOLDER_TEST: &str = r#"from __future__ import annotations


def test_placeholder() -> None:
    assert True
"#;
