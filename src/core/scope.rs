//! Lexical scope resolution over an swc module.
//!
//! [`ScopeTree::build`] walks a module once and records two things:
//!
//! - a table of scopes, each with its parent link and the names it binds;
//! - every identifier reference, in traversal order, tagged with the scope
//!   it occurs in and the innermost statement-list member that encloses it
//!   (a direct child of the module, a block, a `case` or a namespace body).
//!
//! Names are registered for the whole scope that owns them before the
//! scope's body is walked, so hoisted `var`s and functions, as well as
//! `let`/`const` used before their declaration, count as bound everywhere in
//! that scope. Parameters live in their own scope outside the body, so a
//! default value never sees the body's declarations.
//!
//! # Example
//! ```ignore
//! import { ref } from 'vue';      // module scope: ref, f
//! function f(window) {            // function scope: window
//!     window.open();              // bound: resolves to the parameter
//!     document.title = 'x';       // free
//! }
//! ```

use std::collections::HashSet;

use swc_common::{Span, Spanned};
use swc_ecma_ast::{
    ArrayPat, ArrowExpr, AssignTarget, AssignTargetPat, BlockStmt, BlockStmtOrExpr, CatchClause,
    Class, ClassExpr, Constructor, Decl, DefaultDecl, Expr, FnExpr, ForHead, ForInStmt, ForOfStmt,
    ForStmt, Function, GetterProp, ImportSpecifier, Module, ModuleDecl, ModuleItem, ObjectPat,
    ObjectPatProp, ParamOrTsParamProp, Pat, Prop, SetterProp, SimpleAssignTarget, StaticBlock,
    Stmt, SwitchStmt, TsModuleBlock, TsModuleName, TsParamPropParam, VarDecl, VarDeclKind,
    VarDeclOrExpr,
};
use swc_ecma_visit::{Visit, VisitWith};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The module scope.
    pub const ROOT: Self = Self(0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Module,
    /// Parameter list of a function, arrow, method, accessor or constructor.
    Parameters,
    /// Function bodies (with their hoisted `var`s) and class static blocks.
    Function,
    /// Blocks, loop heads, `switch`, `catch` and TypeScript namespace bodies.
    Block,
    /// The self-name of a named function or class expression.
    Name,
}

#[derive(Debug)]
pub struct Scope {
    pub kind: ScopeKind,
    pub parent: Option<ScopeId>,
    bindings: HashSet<String>,
}

impl Scope {
    pub fn binds(&self, name: &str) -> bool {
        self.bindings.contains(name)
    }
}

/// One use of an identifier as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub name: String,
    pub span: Span,
    pub scope: ScopeId,
    /// Span of the innermost statement-list member containing the reference.
    pub statement: Option<Span>,
}

#[derive(Debug)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
    references: Vec<Reference>,
}

impl ScopeTree {
    pub fn build(module: &Module) -> Self {
        let mut builder = ScopeBuilder::default();
        module.visit_with(&mut builder);
        Self {
            scopes: builder.scopes,
            references: builder.references,
        }
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// All references in traversal (source) order.
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Whether `name` is declared in `scope` or any of its ancestors.
    pub fn is_bound(&self, name: &str, scope: ScopeId) -> bool {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = self.scope(id);
            if scope.binds(name) {
                return true;
            }
            current = scope.parent;
        }
        false
    }

    pub fn is_free(&self, name: &str, scope: ScopeId) -> bool {
        !self.is_bound(name, scope)
    }
}

#[derive(Default)]
struct ScopeBuilder {
    scopes: Vec<Scope>,
    stack: Vec<ScopeId>,
    statements: Vec<Span>,
    references: Vec<Reference>,
}

impl ScopeBuilder {
    fn enter(&mut self, kind: ScopeKind, names: impl IntoIterator<Item = String>) {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            kind,
            parent: self.stack.last().copied(),
            bindings: names.into_iter().collect(),
        });
        self.stack.push(id);
    }

    fn exit(&mut self) {
        self.stack.pop();
    }

    fn scoped<N: VisitWith<Self> + ?Sized>(
        &mut self,
        kind: ScopeKind,
        names: Vec<String>,
        node: &N,
    ) {
        self.enter(kind, names);
        node.visit_children_with(self);
        self.exit();
    }

    fn in_statement<N: VisitWith<Self> + ?Sized>(&mut self, span: Span, node: &N) {
        self.statements.push(span);
        node.visit_children_with(self);
        self.statements.pop();
    }

    /// Enter the body scope of a function-like node. Called inside its
    /// parameter scope.
    fn function_body(&mut self, body: &BlockStmt) {
        let mut names = hoisted_var_names(&body.stmts);
        names.extend(lexical_names(&body.stmts));
        self.scoped(ScopeKind::Function, names, body);
    }

    /// Walk a pattern in assignment position: its identifier leaves are
    /// writes to existing bindings, not declarations.
    fn assign_pattern(&mut self, pat: &Pat) {
        match pat {
            Pat::Ident(binding) => self.reference(&binding.id.sym, binding.id.span),
            Pat::Array(array) => self.assign_array(array),
            Pat::Object(object) => self.assign_object(object),
            Pat::Assign(assign) => {
                self.assign_pattern(&assign.left);
                assign.right.visit_with(self);
            }
            Pat::Rest(rest) => self.assign_pattern(&rest.arg),
            Pat::Expr(expr) => expr.visit_with(self),
            Pat::Invalid(_) => {}
        }
    }

    fn assign_array(&mut self, array: &ArrayPat) {
        for elem in array.elems.iter().flatten() {
            self.assign_pattern(elem);
        }
    }

    fn assign_object(&mut self, object: &ObjectPat) {
        for prop in &object.props {
            match prop {
                ObjectPatProp::KeyValue(kv) => {
                    kv.key.visit_with(self);
                    self.assign_pattern(&kv.value);
                }
                ObjectPatProp::Assign(assign) => {
                    self.reference(&assign.key.id.sym, assign.key.id.span);
                    if let Some(value) = &assign.value {
                        value.visit_with(self);
                    }
                }
                ObjectPatProp::Rest(rest) => self.assign_pattern(&rest.arg),
            }
        }
    }

    fn reference(&mut self, name: &str, span: Span) {
        self.references.push(Reference {
            name: name.to_string(),
            span,
            scope: self.stack.last().copied().unwrap_or(ScopeId::ROOT),
            statement: self.statements.last().copied(),
        });
    }
}

impl Visit for ScopeBuilder {
    fn visit_module(&mut self, node: &Module) {
        self.scoped(ScopeKind::Module, module_bindings(&node.body), node);
    }

    fn visit_module_item(&mut self, node: &ModuleItem) {
        match node {
            ModuleItem::Stmt(stmt) => self.in_statement(stmt.span(), stmt),
            // `export const x = ...` is attributed to the declaration alone.
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                self.in_statement(export.decl.span(), export)
            }
            ModuleItem::ModuleDecl(decl) => self.in_statement(decl.span(), decl),
        }
    }

    // Braceless bodies (`if (a) b();`) stay part of their guard statement.
    fn visit_stmts(&mut self, nodes: &[Stmt]) {
        for stmt in nodes {
            self.in_statement(stmt.span(), stmt);
        }
    }

    fn visit_function(&mut self, node: &Function) {
        for decorator in &node.decorators {
            decorator.visit_with(self);
        }

        let names = node
            .params
            .iter()
            .flat_map(|param| binding_names(&param.pat))
            .collect::<Vec<_>>();
        self.enter(ScopeKind::Parameters, names);
        for param in &node.params {
            param.visit_with(self);
        }
        if let Some(body) = &node.body {
            self.function_body(body);
        }
        self.exit();
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        let names = node.params.iter().flat_map(binding_names).collect::<Vec<_>>();
        self.enter(ScopeKind::Parameters, names);
        for param in &node.params {
            param.visit_with(self);
        }
        match &*node.body {
            BlockStmtOrExpr::BlockStmt(body) => self.function_body(body),
            BlockStmtOrExpr::Expr(expr) => expr.visit_with(self),
        }
        self.exit();
    }

    fn visit_constructor(&mut self, node: &Constructor) {
        let names = node
            .params
            .iter()
            .flat_map(|param| match param {
                ParamOrTsParamProp::Param(param) => binding_names(&param.pat),
                ParamOrTsParamProp::TsParamProp(prop) => match &prop.param {
                    TsParamPropParam::Ident(ident) => vec![ident.id.sym.to_string()],
                    TsParamPropParam::Assign(assign) => binding_names(&assign.left),
                },
            })
            .collect::<Vec<_>>();
        self.enter(ScopeKind::Parameters, names);
        for param in &node.params {
            param.visit_with(self);
        }
        if let Some(body) = &node.body {
            self.function_body(body);
        }
        self.exit();
    }

    fn visit_getter_prop(&mut self, node: &GetterProp) {
        node.key.visit_with(self);
        if let Some(body) = &node.body {
            self.function_body(body);
        }
    }

    fn visit_setter_prop(&mut self, node: &SetterProp) {
        node.key.visit_with(self);
        self.enter(ScopeKind::Parameters, binding_names(&node.param));
        node.param.visit_with(self);
        if let Some(body) = &node.body {
            self.function_body(body);
        }
        self.exit();
    }

    fn visit_static_block(&mut self, node: &StaticBlock) {
        self.function_body(&node.body);
    }

    fn visit_fn_expr(&mut self, node: &FnExpr) {
        match &node.ident {
            Some(ident) => self.scoped(ScopeKind::Name, vec![ident.sym.to_string()], node),
            None => node.visit_children_with(self),
        }
    }

    fn visit_class_expr(&mut self, node: &ClassExpr) {
        match &node.ident {
            Some(ident) => self.scoped(ScopeKind::Name, vec![ident.sym.to_string()], node),
            None => node.visit_children_with(self),
        }
    }

    fn visit_block_stmt(&mut self, node: &BlockStmt) {
        self.scoped(ScopeKind::Block, lexical_names(&node.stmts), node);
    }

    fn visit_for_stmt(&mut self, node: &ForStmt) {
        let names = match &node.init {
            Some(VarDeclOrExpr::VarDecl(decl)) if decl.kind != VarDeclKind::Var => {
                var_decl_names(decl)
            }
            _ => Vec::new(),
        };
        self.scoped(ScopeKind::Block, names, node);
    }

    fn visit_for_in_stmt(&mut self, node: &ForInStmt) {
        self.scoped(ScopeKind::Block, for_head_names(&node.left), node);
    }

    fn visit_for_of_stmt(&mut self, node: &ForOfStmt) {
        self.scoped(ScopeKind::Block, for_head_names(&node.left), node);
    }

    fn visit_catch_clause(&mut self, node: &CatchClause) {
        let names = node.param.as_ref().map(binding_names).unwrap_or_default();
        self.scoped(ScopeKind::Block, names, node);
    }

    fn visit_switch_stmt(&mut self, node: &SwitchStmt) {
        node.discriminant.visit_with(self);
        let names: Vec<String> = node
            .cases
            .iter()
            .flat_map(|case| lexical_names(&case.cons))
            .collect();
        self.enter(ScopeKind::Block, names);
        for case in &node.cases {
            case.visit_with(self);
        }
        self.exit();
    }

    fn visit_ts_module_block(&mut self, node: &TsModuleBlock) {
        self.scoped(ScopeKind::Block, module_bindings(&node.body), node);
    }

    fn visit_expr(&mut self, node: &Expr) {
        match node {
            Expr::Ident(ident) => self.reference(&ident.sym, ident.span),
            _ => node.visit_children_with(self),
        }
    }

    fn visit_prop(&mut self, node: &Prop) {
        match node {
            Prop::Shorthand(ident) => self.reference(&ident.sym, ident.span),
            _ => node.visit_children_with(self),
        }
    }

    fn visit_assign_target(&mut self, node: &AssignTarget) {
        match node {
            AssignTarget::Simple(simple) => simple.visit_with(self),
            AssignTarget::Pat(AssignTargetPat::Array(array)) => self.assign_array(array),
            AssignTarget::Pat(AssignTargetPat::Object(object)) => self.assign_object(object),
            AssignTarget::Pat(AssignTargetPat::Invalid(_)) => {}
        }
    }

    fn visit_for_head(&mut self, node: &ForHead) {
        match node {
            ForHead::Pat(pat) => self.assign_pattern(pat),
            _ => node.visit_children_with(self),
        }
    }

    fn visit_simple_assign_target(&mut self, node: &SimpleAssignTarget) {
        match node {
            SimpleAssignTarget::Ident(binding) => self.reference(&binding.id.sym, binding.id.span),
            _ => node.visit_children_with(self),
        }
    }
}

/// Names bound by a binding pattern (parameter or declarator).
pub fn binding_names(pat: &Pat) -> Vec<String> {
    match pat {
        Pat::Ident(ident) => vec![ident.id.sym.to_string()],
        Pat::Object(obj) => obj
            .props
            .iter()
            .flat_map(|prop| match prop {
                ObjectPatProp::KeyValue(kv) => binding_names(&kv.value),
                ObjectPatProp::Assign(assign) => vec![assign.key.sym.to_string()],
                ObjectPatProp::Rest(rest) => binding_names(&rest.arg),
            })
            .collect(),
        Pat::Array(arr) => arr
            .elems
            .iter()
            .flatten()
            .flat_map(binding_names)
            .collect(),
        Pat::Assign(assign) => binding_names(&assign.left),
        Pat::Rest(rest) => binding_names(&rest.arg),
        _ => vec![],
    }
}

fn var_decl_names(decl: &VarDecl) -> Vec<String> {
    decl.decls
        .iter()
        .flat_map(|declarator| binding_names(&declarator.name))
        .collect()
}

fn decl_names(decl: &Decl) -> Vec<String> {
    match decl {
        Decl::Class(class) => vec![class.ident.sym.to_string()],
        Decl::Fn(func) => vec![func.ident.sym.to_string()],
        Decl::Var(var) => var_decl_names(var),
        Decl::Using(using) => using
            .decls
            .iter()
            .flat_map(|declarator| binding_names(&declarator.name))
            .collect(),
        Decl::TsEnum(ts_enum) => vec![ts_enum.id.sym.to_string()],
        Decl::TsModule(module) => match &module.id {
            TsModuleName::Ident(ident) => vec![ident.sym.to_string()],
            _ => vec![],
        },
        _ => vec![],
    }
}

fn for_head_names(head: &ForHead) -> Vec<String> {
    match head {
        ForHead::VarDecl(decl) if decl.kind != VarDeclKind::Var => var_decl_names(decl),
        ForHead::UsingDecl(using) => using
            .decls
            .iter()
            .flat_map(|declarator| binding_names(&declarator.name))
            .collect(),
        _ => vec![],
    }
}

/// Declarations made directly in a statement list.
fn lexical_names(stmts: &[Stmt]) -> Vec<String> {
    stmts
        .iter()
        .filter_map(|stmt| match stmt {
            Stmt::Decl(decl) => Some(decl_names(decl)),
            _ => None,
        })
        .flatten()
        .collect()
}

/// Everything a module (or TypeScript namespace) body binds: imports,
/// top-level declarations and every hoisted `var`.
fn module_bindings(items: &[ModuleItem]) -> Vec<String> {
    let mut names = Vec::new();
    let mut hoister = VarHoister::default();

    for item in items {
        match item {
            ModuleItem::Stmt(Stmt::Decl(decl)) => names.extend(decl_names(decl)),
            ModuleItem::Stmt(_) => {}
            ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => {
                names.extend(import.specifiers.iter().map(|spec| match spec {
                    ImportSpecifier::Named(named) => named.local.sym.to_string(),
                    ImportSpecifier::Default(default) => default.local.sym.to_string(),
                    ImportSpecifier::Namespace(ns) => ns.local.sym.to_string(),
                }));
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                names.extend(decl_names(&export.decl))
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(export)) => match &export.decl {
                DefaultDecl::Class(ClassExpr {
                    ident: Some(ident), ..
                })
                | DefaultDecl::Fn(FnExpr {
                    ident: Some(ident), ..
                }) => names.push(ident.sym.to_string()),
                _ => {}
            },
            ModuleItem::ModuleDecl(ModuleDecl::TsImportEquals(import)) => {
                names.push(import.id.sym.to_string())
            }
            ModuleItem::ModuleDecl(_) => {}
        }
        item.visit_with(&mut hoister);
    }

    names.extend(hoister.names);
    names
}

fn hoisted_var_names(stmts: &[Stmt]) -> Vec<String> {
    let mut hoister = VarHoister::default();
    for stmt in stmts {
        stmt.visit_with(&mut hoister);
    }
    hoister.names
}

/// Collects `var` names up to (not into) the next function boundary.
#[derive(Default)]
struct VarHoister {
    names: Vec<String>,
}

impl Visit for VarHoister {
    fn visit_var_decl(&mut self, node: &VarDecl) {
        if node.kind == VarDeclKind::Var {
            self.names.extend(var_decl_names(node));
        }
    }

    fn visit_expr(&mut self, _: &Expr) {}

    fn visit_function(&mut self, _: &Function) {}

    fn visit_class(&mut self, _: &Class) {}

    fn visit_arrow_expr(&mut self, _: &ArrowExpr) {}

    fn visit_constructor(&mut self, _: &Constructor) {}

    fn visit_getter_prop(&mut self, _: &GetterProp) {}

    fn visit_setter_prop(&mut self, _: &SetterProp) {}

    fn visit_static_block(&mut self, _: &StaticBlock) {}
}
